use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// A multiple-choice question. Option order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: String,
}

impl QuizQuestion {
    /// Build a question, checking that it has options and that the correct
    /// option is one of them.
    pub fn new<S: Into<String>>(prompt: S, options: Vec<String>, correct_option: S) -> Result<Self> {
        let question = QuizQuestion {
            prompt: prompt.into(),
            options,
            correct_option: correct_option.into(),
        };
        question.validate()?;
        Ok(question)
    }

    fn validate(&self) -> Result<()> {
        let malformed = |reason: &str| QuizError::MalformedQuestion {
            prompt: self.prompt.clone(),
            reason: reason.to_string(),
        };
        if self.options.is_empty() {
            return Err(malformed("no options"));
        }
        if !self.has_option(&self.correct_option) {
            return Err(malformed("correct option is not among the options"));
        }
        Ok(())
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_option == option
    }
}

const BUILT_IN: &[(&str, &[&str], &str)] = &[
    (
        "What does AQI stand for?",
        &[
            "Air Quality Index",
            "Atmospheric Quality Indicator",
            "Air Quantity Index",
            "Aerosol Quality Index",
        ],
        "Air Quality Index",
    ),
    (
        "Which pollutant is made of particles 2.5 micrometres across or smaller?",
        &["PM10", "PM2.5", "Ozone", "Nitrogen dioxide"],
        "PM2.5",
    ),
    (
        "An AQI between 0 and 50 falls in which category?",
        &["Good", "Moderate", "Poor", "Severe"],
        "Good",
    ),
    (
        "Which unit are PM2.5 and PM10 concentrations reported in?",
        &["µg/m³", "ppm", "dB", "mg/L"],
        "µg/m³",
    ),
    (
        "A higher PM2.5/PM10 ratio means a larger share of what?",
        &["Fine particles", "Coarse dust", "Pollen", "Water vapour"],
        "Fine particles",
    ),
    (
        "Which weather condition tends to trap pollutants near the ground?",
        &["Temperature inversion", "Strong wind", "Heavy rain", "Low humidity"],
        "Temperature inversion",
    ),
];

/// The fixed question bank shown on the dashboard's quiz page.
pub fn default_questions() -> Vec<QuizQuestion> {
    BUILT_IN
        .iter()
        .map(|(prompt, options, correct)| QuizQuestion {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct.to_string(),
        })
        .collect()
}

/// Parse a question bank from JSON: `[{"prompt", "options", "correctOption"}]`.
/// Every question is validated.
pub fn load_questions(json: &str) -> Result<Vec<QuizQuestion>> {
    let questions: Vec<QuizQuestion> = serde_json::from_str(json)?;
    for q in &questions {
        q.validate()?;
    }
    log::info!("[AQD] quiz: Loaded {} questions", questions.len());
    Ok(questions)
}
