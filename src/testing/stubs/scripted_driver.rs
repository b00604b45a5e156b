use crate::ui::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bool(bool),
    Text(String),
    U64(u64),
    F64(f64),
    Select(usize),
    MultiSelect(Vec<usize>),
}

/// Replays a fixed list of answers, one per prompt, failing on a mismatch.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            other => bail!("'{title}': expected a bool answer, got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("'{title}': expected a text answer, got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        match self.next(title)? {
            Answer::U64(n) if min.is_none_or(|lo| n >= lo) && max.is_none_or(|hi| n <= hi) => Ok(n),
            other => bail!("'{title}': expected an integer answer in range, got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::F64(x) if min.is_none_or(|lo| x >= lo) && max.is_none_or(|hi| x <= hi) => Ok(x),
            other => bail!("'{title}': expected a number answer in range, got {other:?}"),
        }
    }

    fn ask_select(&self, title: &str, _help: &str, options: &[String], _default: usize) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            other => bail!("'{title}': expected a choice among {} options, got {other:?}", options.len()),
        }
    }

    fn ask_multi_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        _defaults: &[usize],
    ) -> Result<Vec<usize>> {
        match self.next(title)? {
            Answer::MultiSelect(picked) if picked.iter().all(|&i| i < options.len()) => Ok(picked),
            other => bail!("'{title}': expected choices among {} options, got {other:?}", options.len()),
        }
    }
}
