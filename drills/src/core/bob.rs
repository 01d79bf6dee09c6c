//! Bob, the lackadaisical teenager.

use std::fmt;

use serde::Serialize;

/// Shape of a remark after trimming surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceType {
    pub is_question: bool,
    pub is_yelling: bool,
    pub is_silence: bool,
}

impl SentenceType {
    pub fn from_sentence(sentence: &str) -> Self {
        let trimmed = sentence.trim();
        Self {
            is_question: trimmed.ends_with('?'),
            is_yelling: is_yelled(trimmed),
            is_silence: trimmed.is_empty(),
        }
    }
}

/// Yelled text has at least one uppercase letter and no lowercase ones.
fn is_yelled(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Silence,
    YellQuestion,
    Question,
    Yell,
    Whatever,
}

impl Response {
    pub fn as_str(self) -> &'static str {
        match self {
            Response::Silence => "Fine. Be that way!",
            Response::YellQuestion => "Calm down, I know what I'm doing!",
            Response::Question => "Sure.",
            Response::Yell => "Whoa, chill out!",
            Response::Whatever => "Whatever.",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn response(sentence: &str) -> Response {
    let kind = SentenceType::from_sentence(sentence);
    match (kind.is_silence, kind.is_question, kind.is_yelling) {
        (true, _, _) => Response::Silence,
        (false, true, true) => Response::YellQuestion,
        (false, true, false) => Response::Question,
        (false, false, true) => Response::Yell,
        (false, false, false) => Response::Whatever,
    }
}
