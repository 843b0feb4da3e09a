use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ReviewError};

/// Assessment module a question belongs to. Unknown tags are kept
/// verbatim as `Other` so malformed input never fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Financial,
    Compliance,
    Staffing,
    Technology,
    Operations,
    PatientExperience,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Financial => "financial",
            Category::Compliance => "compliance",
            Category::Staffing => "staffing",
            Category::Technology => "technology",
            Category::Operations => "operations",
            Category::PatientExperience => "patient-experience",
            Category::Other(tag) => tag,
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "financial" => Category::Financial,
            "compliance" => Category::Compliance,
            "staffing" => Category::Staffing,
            "technology" => Category::Technology,
            "operations" => Category::Operations,
            "patient-experience" => Category::PatientExperience,
            _ => Category::Other(tag.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Category::from(tag.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: Category,
    /// Missing and `null` both load as empty text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub help_text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a JSON array of questions.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ReviewError::Json {
        path: path.to_path_buf(),
        source,
    })
}

const OVERHEAD_HELP: &str = "Your overhead ratio shows how much of your money goes to running \
the practice instead of paying the doctors. To find it, add up rent, staff pay, supplies, \
software, and other costs of keeping the doors open. Then divide that total by the money the \
practice brings in. For example, a practice that collects $600,000 a year and spends $300,000 \
on those costs has a ratio of 50%. Most practices land between 55% and 65%. A number \
well above that range often means costs have crept up over time. It can also mean the practice \
is not billing for all the work it does. A number well below the range is good news, but check \
that you are not short on staff or putting off needed repairs. Look at this number once a \
year, and again any time you add a new hire or sign a new lease. Small changes here can free \
up cash you can put back into care, pay, or growth. Track it the same way each time so you can \
compare one year to the next.";

/// The demo set used when no question file is supplied.
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            id: "fin-overhead-ratio".to_string(),
            text: "What is your practice's overhead ratio?".to_string(),
            category: Category::Financial,
            help_text: OVERHEAD_HELP.to_string(),
        },
        Question {
            id: "staff-scheduling".to_string(),
            text: "How do you schedule your staff?".to_string(),
            category: Category::Staffing,
            help_text: "Describe how you handle staff scheduling each week.".to_string(),
        },
        Question {
            id: "comp-hipaa-training".to_string(),
            text: "How often does your team complete HIPAA training?".to_string(),
            category: Category::Compliance,
            help_text: "Regular HIPAA training reduces the organizational liability \
associated with inadvertent disclosure of protected health information during daily operations."
                .to_string(),
        },
        Question {
            id: "tech-ehr-uptime".to_string(),
            text: "How reliable is your EHR system?".to_string(),
            category: Category::Technology,
            help_text: "Think about how often your EHR goes down. Even 2 hours of downtime \
a month can slow check-in and billing."
                .to_string(),
        },
    ]
}
