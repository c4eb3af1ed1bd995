//! Interactive quiz on the terminal.
//!
//! Enter an option number to answer, `r` to reset the session, `q` to quit.

use anyhow::Context;
use aqd_quiz::{default_questions, load_questions, QuizQuestion, QuizSession, ScoreCard, Submission};
use log::info;
use std::io::{self, BufRead, Write};

pub fn run_quiz_command(questions_path: Option<&str>) -> anyhow::Result<()> {
    let questions = match questions_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read question bank {}", path))?;
            load_questions(&json)?
        }
        None => default_questions(),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let card = run_quiz(&questions, stdin.lock(), stdout.lock())?;
    info!("Quiz finished with {}/{}", card.score, card.total);
    Ok(())
}

fn print_question<W: Write>(out: &mut W, index: usize, question: &QuizQuestion) -> io::Result<()> {
    writeln!(out, "\nQ{}. {}", index + 1, question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option)?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// Drive one quiz session over `input`/`output` until every question is
/// answered, the user quits, or input ends.
pub fn run_quiz<R: BufRead, W: Write>(
    questions: &[QuizQuestion],
    input: R,
    mut output: W,
) -> anyhow::Result<ScoreCard> {
    let total = questions.len();
    let mut session = QuizSession::new();
    let mut lines = input.lines();
    let mut index = 0;

    while index < total {
        let question = &questions[index];
        print_question(&mut output, index, question)?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match line.trim() {
            "q" => break,
            "r" => {
                session.reset();
                index = 0;
                writeln!(output, "Quiz reset.")?;
                continue;
            }
            answer => {
                let chosen = answer
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| question.options.get(i));
                let Some(chosen) = chosen else {
                    writeln!(output, "Enter a number from 1 to {}.", question.options.len())?;
                    continue;
                };
                match session.submit_answer(index, chosen, questions)? {
                    Submission::Correct => writeln!(output, "Correct!")?,
                    Submission::Incorrect { correct_option } => {
                        writeln!(output, "Incorrect. The correct answer is: {}", correct_option)?
                    }
                    Submission::AlreadyAnswered { .. } => writeln!(output, "Already answered.")?,
                }
                index += 1;
            }
        }
    }

    let card = session.current_score(total);
    writeln!(output, "\nScore: {}/{}", card.score, card.total)?;
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bank() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new("Q0", vec!["a".to_string(), "b".to_string()], "a").unwrap(),
            QuizQuestion::new("Q1", vec!["x".to_string(), "y".to_string()], "y").unwrap(),
        ]
    }

    fn play(script: &str) -> (ScoreCard, String) {
        let mut out = Vec::new();
        let card = run_quiz(&bank(), Cursor::new(script), &mut out).unwrap();
        (card, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_correct() {
        let (card, out) = play("1\n2\n");
        assert_eq!(card, ScoreCard { score: 2, total: 2 });
        assert!(out.contains("Score: 2/2"));
    }

    #[test]
    fn wrong_answer_shows_correct_option() {
        let (card, out) = play("2\n2\n");
        assert_eq!(card.score, 1);
        assert!(out.contains("The correct answer is: a"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (card, out) = play("9\nfoo\n1\n2\n");
        assert_eq!(card.score, 2);
        assert_eq!(out.matches("Enter a number from 1 to 2.").count(), 2);
    }

    #[test]
    fn reset_starts_over() {
        let (card, out) = play("1\nr\n2\n1\n");
        assert!(out.contains("Quiz reset."));
        assert_eq!(card, ScoreCard { score: 0, total: 2 });
    }

    #[test]
    fn quit_and_eof_end_early() {
        let (card, _) = play("1\nq\n");
        assert_eq!(card, ScoreCard { score: 1, total: 2 });
        let (card, _) = play("");
        assert_eq!(card.score, 0);
    }
}
