pub mod article_detail;
pub mod article_list;
pub mod article_write;
pub mod not_found;
pub mod save_animal_detail;
pub mod save_animals;
