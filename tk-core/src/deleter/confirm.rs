use std::io::{
    BufRead,
    Write,
};

use tracing::*;

use super::{
    DeletionRequest,
    quoted_list,
};
use crate::prelude::*;

pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

// Writes the prompt to `output` and reads a single line from `input`.  A closed input stream
// counts as "no".
pub struct StreamConfirmation<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConfirmation<R, W> {
    pub fn new(input: R, output: W) -> StreamConfirmation<R, W> {
        StreamConfirmation { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for StreamConfirmation<R, W> {
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            debug!("input closed before an answer was given");
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    CONFIRM_ANSWERS.iter().any(|a| answer.eq_ignore_ascii_case(a))
}

pub fn prompt_for(req: &DeletionRequest) -> String {
    if req.all {
        return format!("Are you sure you want to delete all {CLUSTER_TASK_RESOURCE}s (y/n): ");
    }

    let subject = if req.include_dependents {
        format!("{CLUSTER_TASK_RESOURCE} and related resources")
    } else {
        CLUSTER_TASK_RESOURCE.into()
    };
    format!("Are you sure you want to delete {subject} {} (y/n): ", quoted_list(&req.target_names))
}

pub fn cancel_message_for(req: &DeletionRequest) -> String {
    match req.target_names.first() {
        Some(name) if !req.all => format!("canceled deleting {CLUSTER_TASK_RESOURCE} {name:?}"),
        _ => format!("canceled deleting all {CLUSTER_TASK_RESOURCE}s"),
    }
}
