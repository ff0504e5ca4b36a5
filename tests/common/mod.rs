use serde_derive::Serialize;

#[derive(Debug, Serialize)]
pub struct Name {
    pub family: String,
    pub given: String,
}

#[derive(Debug, Serialize)]
pub struct Issued {
    #[serde(rename = "date-parts")]
    pub date_parts: Vec<Vec<i32>>,
}

/// A CSL-JSON flavoured record, the shape collaborators hand to the engine
#[derive(Debug, Serialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub author: Vec<Name>,
    pub issued: Issued,
    #[serde(rename = "container-title")]
    pub container_title: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    pub keyword: Vec<String>,
}

impl Item {
    #[allow(dead_code)]
    pub fn new() -> Item {
        Item {
            id: "vaswani2017".to_owned(),
            kind: "paper-conference".to_owned(),
            title: "Attention Is All You Need".to_owned(),
            author: vec![
                Name { family: "Vaswani".to_owned(), given: "Ashish".to_owned() },
                Name { family: "Shazeer".to_owned(), given: "Noam".to_owned() },
                Name { family: "Parmar".to_owned(), given: "Niki".to_owned() },
            ],
            issued: Issued { date_parts: vec![vec![2017, 12, 4]] },
            container_title: Some("Advances in Neural Information Processing Systems".to_owned()),
            doi: None,
            keyword: vec!["transformers".to_owned(), "attention".to_owned()],
        }
    }

    #[allow(dead_code)]
    pub fn untitled() -> Item {
        Item {
            id: "anon".to_owned(),
            kind: "book".to_owned(),
            title: "Of the".to_owned(),
            author: vec![],
            issued: Issued { date_parts: vec![vec![1651]] },
            container_title: None,
            doi: Some("10.1000/182".to_owned()),
            keyword: vec![],
        }
    }
}
