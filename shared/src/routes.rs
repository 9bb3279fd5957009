//! Route tables for the animal and article sections.
//!
//! The two tables are defined independently and do not share a naming
//! convention. The front-end router must keep its `#[at]` paths identical
//! to [`AnimalRoute::path`] and [`ArticleRoute::path`].

use std::fmt;

/// Page shown when no listing page is given.
pub const DEFAULT_ARTICLE_PAGE: u32 = 1;

/// Routes of the saved-animal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalRoute {
    /// `/save-animals`
    List,
    /// `/save-animals/{id}`
    Detail {
        /// Animal identifier.
        id: u64,
    },
}

impl AnimalRoute {
    /// Absolute path of the route.
    pub fn path(&self) -> String {
        match self {
            AnimalRoute::List => "/save-animals".to_string(),
            AnimalRoute::Detail {
                id,
            } => format!("/save-animals/{id}"),
        }
    }
}

/// Routes of the article board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleRoute {
    /// `/articles/{page}`
    List {
        /// 1-based listing page.
        page: u32,
    },
    /// `/articles/detail/{id}`
    Detail {
        /// Board identifier.
        id: u64,
    },
    /// `/articles/new`
    Write,
    /// `/articles/edit/{id}`
    Edit {
        /// Board identifier.
        id: u64,
    },
}

impl ArticleRoute {
    /// Listing route used when no specific page applies.
    pub fn default_list() -> Self {
        ArticleRoute::List {
            page: DEFAULT_ARTICLE_PAGE,
        }
    }

    /// Where to go after a successful submission: the board's detail page
    /// when one was edited, the default listing otherwise.
    pub fn after_submit(board_id: Option<u64>) -> Self {
        match board_id {
            Some(id) => ArticleRoute::Detail {
                id,
            },
            None => ArticleRoute::default_list(),
        }
    }

    /// Absolute path of the route.
    pub fn path(&self) -> String {
        match self {
            ArticleRoute::List {
                page,
            } => format!("/articles/{page}"),
            ArticleRoute::Detail {
                id,
            } => format!("/articles/detail/{id}"),
            ArticleRoute::Write => "/articles/new".to_string(),
            ArticleRoute::Edit {
                id,
            } => format!("/articles/edit/{id}"),
        }
    }
}

impl fmt::Display for AnimalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl fmt::Display for ArticleRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimalRoute, ArticleRoute};

    #[test]
    fn animal_paths() {
        assert_eq!(AnimalRoute::List.path(), "/save-animals");
        assert_eq!(
            AnimalRoute::Detail {
                id: 42
            }
            .path(),
            "/save-animals/42"
        );
    }

    #[test]
    fn article_paths() {
        assert_eq!(ArticleRoute::default_list().path(), "/articles/1");
        assert_eq!(
            ArticleRoute::Detail {
                id: 5
            }
            .to_string(),
            "/articles/detail/5"
        );
        assert_eq!(ArticleRoute::Write.path(), "/articles/new");
        assert_eq!(
            ArticleRoute::Edit {
                id: 9
            }
            .path(),
            "/articles/edit/9"
        );
    }

    #[test]
    fn submit_destination_depends_on_board() {
        assert_eq!(ArticleRoute::after_submit(None), ArticleRoute::default_list());
        assert_eq!(
            ArticleRoute::after_submit(Some(5)),
            ArticleRoute::Detail {
                id: 5
            }
        );
    }
}
