//! parse task document with structure like
//! ```text
//! task
//! method: bisection
//! function: x - 2
//! a: 0
//! settings
//! loglevel: info
//! ```
//! which has titles on their own lines followed by `key: value` lines. The value is
//! the rest of the line, so it may hold spaces ("x - 2", "1 4 9").
//! Lines starting with //, #, % or ; and empty lines are ignored.
use crate::Utils::logger::init_logger;
use crate::Utils::method_table::NumericalMethod;
use crate::numerical::method_result::MethodResult;
use log::info;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, line_ending, multispace0, not_line_ending, space0},
    combinator::{eof, map, recognize},
    multi::{many0, many1},
    sequence::{delimited, pair, terminated},
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

type SectionMap = HashMap<String, String>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// section holding the method and its inputs
pub const TASK_SECTION: &str = "task";
/// optional section with loglevel and log_to_file
pub const SETTINGS_SECTION: &str = "settings";

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

/// Parses a title: an identifier alone on its line
fn parse_title(input: &str) -> IResult<&str, String> {
    terminated(
        delimited(space0, identifier, space0),
        alt((line_ending, eof)),
    )
    .parse(input)
}

/// Parses a key (word characters without spaces)
fn parse_key(input: &str) -> IResult<&str, String> {
    delimited(space0, identifier, space0).parse(input)
}

/// Parses a `key: value` line, the value is the trimmed rest of the line
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, String)> {
    let (input, key) = parse_key(input)?;
    let (input, _) = tag(":").parse(input)?;
    let (input, value) = not_line_ending(input)?;
    let (input, _) = alt((line_ending, eof)).parse(input)?;
    Ok((input, (key, value.trim().to_string())))
}

/// Parses a section with a title and its key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, title) = parse_title(input)?;
    let (input, pairs) = many0(parse_key_value_pair).parse(input)?;
    let section_map = pairs.into_iter().collect::<SectionMap>();
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with //, #, %, or ;)
fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into a HashMap of sections
pub fn parse_document(input: &str) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    match parser.parse(filtered.as_str()) {
        Ok((remaining, sections)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            let mut result = DocumentMap::new();
            for (title, section_map) in sections {
                result.entry(title).or_default().extend(section_map);
            }
            Ok(result)
        }
        Err(e) => Err(format!("Parsing error: {:?}", e)),
    }
}

/// A method together with its text inputs and logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub method: NumericalMethod,
    /// input text by argument key, see `NumericalMethod::arguments`
    pub inputs: HashMap<String, String>,
    pub loglevel: Option<String>,
    pub log_to_file: bool,
}

impl Task {
    pub fn from_document(input: &str) -> Result<Task, String> {
        let mut document = parse_document(input)?;
        let mut task_section = document
            .remove(TASK_SECTION)
            .ok_or_else(|| format!("no '{}' section found", TASK_SECTION))?;
        let method_name = task_section
            .remove("method")
            .ok_or_else(|| "key 'method' not found in the task section".to_string())?;
        let method = NumericalMethod::from_str(&method_name)
            .map_err(|_| format!("unknown method '{}'", method_name))?;
        let known: Vec<&str> = method.arguments().iter().map(|d| d.key).collect();
        if let Some(unknown) = task_section.keys().find(|k| !known.contains(&k.as_str())) {
            return Err(format!(
                "unknown key '{}' for {}, expected one of {:?}",
                unknown, method, known
            ));
        }

        let settings = document.remove(SETTINGS_SECTION).unwrap_or_default();
        let loglevel = settings.get("loglevel").cloned();
        let log_to_file = match settings.get("log_to_file") {
            Some(flag) => flag
                .parse::<bool>()
                .map_err(|_| format!("log_to_file must be true or false, got '{}'", flag))?,
            None => false,
        };
        if let Some(section) = document.keys().next() {
            return Err(format!("unknown section '{}'", section));
        }
        Ok(Task {
            method,
            inputs: task_section,
            loglevel,
            log_to_file,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Task, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Task::from_document(&content)
    }

    /// Starts logging as the settings ask and runs the method.
    pub fn run(&self) -> Result<MethodResult, String> {
        init_logger(self.loglevel.as_deref(), self.log_to_file)?;
        let result = self.method.run_named(&self.inputs);
        info!("{}: {}", self.method, result);
        Ok(result)
    }
}
