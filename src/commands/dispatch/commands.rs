//! Command implementations for all hackgrade commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use hackgrade_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::commands::{BaselineArgs, GradeArgs, InspectArgs};
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{baseline, grade, inspect};
    use hackgrade_core::task::Task;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::GradeHa(args) => execute_grade(ctx, args, &Task::heart_attack()),
            Commands::GradeSynthbank(args) => {
                let windows = &ctx.config.synthbank.prediction_windows_months;
                execute_grade(ctx, args, &Task::synthbank(windows))
            }
            Commands::BaselineHa(args) => {
                execute_baseline(ctx, args, baseline::BaselineKind::HeartAttack)
            }
            Commands::BaselineSynthcc(args) => {
                execute_baseline(ctx, args, baseline::BaselineKind::ChargeOff)
            }
            Commands::Inspect(args) => execute_inspect(ctx, args),
        }
    }

    fn execute_grade(ctx: &CommandContext, args: &GradeArgs, task: &Task) -> Result<()> {
        trace_command!(ctx.cli, ctx.start, "dispatch_grade");
        grade::execute(ctx.cli, args, task)
    }

    fn execute_baseline(
        ctx: &CommandContext,
        args: &BaselineArgs,
        kind: baseline::BaselineKind,
    ) -> Result<()> {
        trace_command!(ctx.cli, ctx.start, "dispatch_baseline");
        baseline::execute(ctx.cli, ctx.config, args, kind)
    }

    fn execute_inspect(ctx: &CommandContext, args: &InspectArgs) -> Result<()> {
        trace_command!(ctx.cli, ctx.start, "dispatch_inspect");
        inspect::execute(ctx.cli, args)
    }
}
