use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub firstname: String,
    pub lastname: String,
}

impl Author {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A catalog entry. Every field may be missing on input and decodes to its
/// zero value; `id` on input is always replaced by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub price: String,
    pub link: String,
    pub author: Option<Author>,
}

impl Course {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// The three catalog entries every fresh store starts with.
pub fn seed_courses() -> Vec<Course> {
    let author = Author::new("Hitesh", "Choudhary");
    vec![
        Course {
            id: "124134".to_string(),
            name: "FullStack Django Developer Freelance ready".to_string(),
            price: "299".to_string(),
            link: "https://courses.learncodeonline.in/learn/FullStack-Django-Developer-Freelance-ready".to_string(),
            author: Some(author.clone()),
        },
        Course {
            id: "154434".to_string(),
            name: "Full stack with Django and React".to_string(),
            price: "299".to_string(),
            link: "https://courses.learncodeonline.in/learn/Full-stack-with-Django-and-React".to_string(),
            author: Some(author.clone()),
        },
        Course {
            id: "198767".to_string(),
            name: "Complete React Native bootcamp".to_string(),
            price: "199".to_string(),
            link: "https://courses.learncodeonline.in/learn/Complete-React-Native-Mobile-App-developer".to_string(),
            author: Some(author),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_decodes_to_zero_values() {
        let course: Course =
            serde_json::from_str(r#"{"name":"X","price":"10","link":"l"}"#).unwrap();

        assert_eq!(course.name, "X");
        assert_eq!(course.id, "");
        assert!(course.author.is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(&seed_courses()[0]).unwrap();

        assert_eq!(json["id"], "124134");
        assert_eq!(json["author"]["firstname"], "Hitesh");
        assert_eq!(json["author"]["lastname"], "Choudhary");

        let json = serde_json::to_value(Course::default()).unwrap();
        assert!(json["author"].is_null());
    }
}
