use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Category, ParseEnumError};

/// Top-level pages that carry a banner and a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Dogs,
    Cats,
    Fishes,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Dogs, Page::Cats, Page::Fishes];

    /// Category listed on this page; `None` for the home page which lists
    /// everything.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Page::Home => None,
            Page::Dogs => Some(Category::Dog),
            Page::Cats => Some(Category::Cat),
            Page::Fishes => Some(Category::Fish),
        }
    }

    /// URL slug and handler name (`home`, `dogs`, `cats`, `fishes`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dogs => "dogs",
            Page::Cats => "cats",
            Page::Fishes => "fishes",
        }
    }

    #[must_use]
    pub fn banner(self) -> Banner {
        let (title, image) = match self {
            Page::Home => ("Todos os animais", "allanimals.jpg"),
            Page::Dogs => ("Cachorros", "banner_dog.jpg"),
            Page::Cats => ("Gatos", "banner_cat.jpg"),
            Page::Fishes => ("Peixes", "banner_fish.jpg"),
        };
        Banner {
            title: title.to_string(),
            background: format!("images/{image}"),
        }
    }

    #[must_use]
    pub fn menu(self) -> MenuState {
        MenuState {
            home: self == Page::Home,
            dogs: self == Page::Dogs,
            cats: self == Page::Cats,
            fishes: self == Page::Fishes,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("home") {
            return Ok(Page::Home);
        }
        Ok(match s.parse::<Category>()? {
            Category::Dog => Page::Dogs,
            Category::Cat => Page::Cats,
            Category::Fish => Page::Fishes,
        })
    }
}

/// Page header picture and caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: String,
    /// Path of the background image relative to the public directory
    pub background: String,
}

/// Which menu entry is highlighted. At most one flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    pub home: bool,
    pub dogs: bool,
    pub cats: bool,
    pub fishes: bool,
}
