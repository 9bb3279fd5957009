#![allow(dead_code, reason = "string table shared by every component")]

pub mod common {
    pub const LOADING: &str = "불러오는 중...";
    pub const BACK: &str = "뒤로 가기";
}

pub mod header {
    pub const BRAND: &str = "댕냥당";
    pub const ANIMALS: &str = "보호 동물";
    pub const ARTICLES: &str = "게시판";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod alert_modal {
    pub const CONFIRM: &str = "확인";
    pub const CLOSE_ARIA: &str = "알림 닫기";
}

pub mod preview_modal {
    pub const TITLE: &str = "미리보기";
    pub const CLOSE: &str = "닫기";
    pub const EMPTY_TITLE: &str = "(제목 없음)";
}

pub mod article_editor {
    pub const TITLE_LABEL: &str = "제목";
    pub const CONTENT_LABEL: &str = "내용";
    pub const SAVE_DRAFT: &str = "임시 저장";
    pub const PREVIEW: &str = "미리보기";
    pub const SUBMIT: &str = "제출";
}

pub mod rich_text_editor {
    pub const LINK_PROMPT: &str = "링크 주소를 입력하세요";
    pub const IMAGE_ALT: &str = "첨부 이미지";
    pub const UPLOADING: &str = "이미지 업로드 중...";
}

pub mod save_animal_card {
    pub const APPLICANTS_TEMPLATE: &str = "입양희망자: {}";
    pub const SHELTER_TEMPLATE: &str = "보호 기관 : {}";
    pub const AGE_TEMPLATE: &str = "{}살";
    pub const LOCATION_TEMPLATE: &str = "지역 : {}";
    pub const IMAGE_ALT: &str = "이미지 등록";
}

pub mod like_button {
    pub const LIKE: &str = "관심 등록";
    pub const UNLIKE: &str = "관심 해제";
}

pub mod save_animals_page {
    pub const TITLE: &str = "보호 중인 동물";
    pub const EMPTY: &str = "등록된 동물이 없습니다.";
}

pub mod save_animal_detail {
    pub const NOT_FOUND: &str = "동물 정보를 찾을 수 없습니다.";
    pub const CODE: &str = "등록 번호";
    pub const TYPE: &str = "종류";
    pub const WEIGHT: &str = "몸무게";
    pub const RESCUE_DATE: &str = "구조일";
    pub const RESCUE_LOCATION: &str = "구조 장소";
    pub const FEATURE: &str = "특징";
    pub const STATE: &str = "상태";
    pub const DETAIL: &str = "상세 정보";
}

pub mod article_list {
    pub const TITLE: &str = "게시판";
    pub const WRITE: &str = "글쓰기";
    pub const EMPTY: &str = "게시글이 없습니다.";
    pub const PREV: &str = "이전";
    pub const NEXT: &str = "다음";
    pub const PAGE_TEMPLATE: &str = "{} 페이지";
}

pub mod article_detail {
    pub const NOT_FOUND: &str = "게시글을 찾을 수 없습니다.";
    pub const EDIT: &str = "수정";
    pub const TO_LIST: &str = "목록";
}

pub mod article_write {
    pub const WRITE_TITLE: &str = "글쓰기";
    pub const EDIT_TITLE: &str = "글 수정";
}

pub mod not_found {
    pub const TITLE: &str = "404 - 페이지를 찾을 수 없습니다";
    pub const BODY: &str = "요청하신 페이지가 존재하지 않습니다.";
}
