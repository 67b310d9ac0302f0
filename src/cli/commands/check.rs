use std::collections::HashSet;

use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::conditional_text::{FindingKind, check_conditional_text_issues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    DangerousConditional,
    DangerousLiteral,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::DangerousConditional, CheckRule::DangerousLiteral]
    }

    pub fn kind(self) -> FindingKind {
        match self {
            CheckRule::DangerousConditional => FindingKind::DangerousConditional,
            CheckRule::DangerousLiteral => FindingKind::DangerousLiteral,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };
    let enabled: HashSet<FindingKind> = checks.into_iter().map(CheckRule::kind).collect();

    let mut all_issues: Vec<Issue> = check_conditional_text_issues(&ctx)
        .into_iter()
        .filter(|issue| enabled.contains(&issue.kind))
        .map(Issue::ConditionalText)
        .collect();

    let parse_errors = ctx.parsed_files_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(CommandResult::new(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
    ))
}
