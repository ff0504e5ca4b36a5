mod blocks;

use serde_derive::Serialize;

#[derive(Debug, Serialize)]
pub struct Author {
    pub family: String,
    pub given: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Record {
    pub title: String,
    pub author: Vec<Author>,
    pub year: u32,
    pub keyword: Vec<String>,
    pub doi: Option<String>,
}

impl Record {
    #[allow(dead_code)]
    pub fn new() -> Record {
        Record {
            title: "The Art of War".to_owned(),
            author: vec![
                Author { family: "Sun".to_owned(), given: Some("Tzu".to_owned()) },
                Author { family: "Giles".to_owned(), given: None },
            ],
            year: 1910,
            keyword: vec!["strategy".to_owned(), "classics".to_owned()],
            doi: None,
        }
    }
}
