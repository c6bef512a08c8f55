use serde::{Deserialize, Serialize};

pub type TopicId = i64;
pub type QuestionId = i64;

pub const NEW_TOPIC_CATEGORY: &str = "New Topic";
pub const NEW_QUESTION_TITLE: &str = "New Question";
pub const DEFAULT_DIFFICULTY: &str = "Easy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub category: String,
    pub questions: Vec<Question>,
}

impl Topic {
    pub fn new(id: TopicId) -> Self {
        Self {
            id,
            category: NEW_TOPIC_CATEGORY.to_string(),
            questions: Vec::new(),
        }
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    // Free text; see `Difficulty` for the display reading.
    pub difficulty: String,
    pub solution: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

impl Question {
    pub fn new(id: QuestionId) -> Self {
        Self {
            id,
            title: NEW_QUESTION_TITLE.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            solution: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
        }
    }

    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::from_str(&self.difficulty)
    }

    pub fn time_complexity_label(&self) -> &str {
        or_not_available(&self.time_complexity)
    }

    pub fn space_complexity_label(&self) -> &str {
        or_not_available(&self.space_complexity)
    }

    pub fn solution_label(&self) -> &str {
        if self.solution.is_empty() {
            "No solution added."
        } else {
            &self.solution
        }
    }
}

fn or_not_available(s: &str) -> &str {
    if s.is_empty() {
        "N/A"
    } else {
        s
    }
}

// Difficulty is never validated on questions; this is only how it is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Difficulty::Easy,
            "medium" | "m" => Difficulty::Medium,
            "hard" | "h" => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }
}

/// The catalogue a fresh session starts from.
pub fn sample_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: 1,
            category: "Arrays".to_string(),
            questions: vec![
                Question {
                    id: 101,
                    title: "Two Sum".to_string(),
                    difficulty: "Easy".to_string(),
                    solution: "Use a hash map to store complement values".to_string(),
                    time_complexity: "O(n)".to_string(),
                    space_complexity: "O(n)".to_string(),
                },
                Question {
                    id: 102,
                    title: "Maximum Subarray".to_string(),
                    difficulty: "Medium".to_string(),
                    solution: "Kadane's algorithm".to_string(),
                    time_complexity: "O(n)".to_string(),
                    space_complexity: "O(1)".to_string(),
                },
            ],
        },
        Topic {
            id: 2,
            category: "Linked Lists".to_string(),
            questions: vec![Question {
                id: 201,
                title: "Reverse Linked List".to_string(),
                difficulty: "Easy".to_string(),
                solution: "Iterative and recursive approaches".to_string(),
                time_complexity: "O(n)".to_string(),
                space_complexity: "O(1)".to_string(),
            }],
        },
    ]
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
