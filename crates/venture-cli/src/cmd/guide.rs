//! Interactive guide session.
//!
//! Renders the step list, then reads simple commands from stdin until EOF or
//! `quit`. Completion state lives only for the lifetime of the session; the
//! journal and feedback sinks are the only things written to disk.

use crate::output::bar_chart;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;
use venture_core::config::Config;
use venture_core::journal::{self, LogSink};
use venture_core::progress::CompletionState;
use venture_core::types::{Profile, Project};
use venture_core::{catalog, engagement, recommend};

pub fn run(
    root: &Path,
    name: Option<&str>,
    profile: &str,
    project: &str,
    no_delay: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load configuration")?;
    let profile: Profile = profile
        .parse()
        .with_context(|| format!("cannot start guide for profile '{profile}'"))?;

    // Unrecognized project selections render nothing and are not an error.
    if Project::parse_opt(project).is_none() {
        tracing::debug!(project, "unrecognized project selection; nothing to show");
        return Ok(());
    }

    let name = name.unwrap_or(&config.user_name).to_string();

    if !no_delay && config.pacing_ms > 0 {
        // Cosmetic pacing only; has no effect on session semantics.
        std::thread::sleep(Duration::from_millis(config.pacing_ms));
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(root, &config, &name, profile);
    session.run(&mut stdin.lock(), &mut stdout.lock())
}

struct Session<'a> {
    root: &'a Path,
    config: &'a Config,
    name: &'a str,
    profile: Profile,
    state: CompletionState,
}

impl<'a> Session<'a> {
    fn new(root: &'a Path, config: &'a Config, name: &'a str, profile: Profile) -> Self {
        Self {
            root,
            config,
            name,
            profile,
            state: CompletionState::new(),
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()> {
        writeln!(
            out,
            "Hello, {}! Here are the 10 Steps to Starting a New Business\n",
            self.name
        )?;
        self.render_steps(out)?;
        writeln!(out, "\nType 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(out, "venture> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (cmd, rest) = match line.split_once(' ') {
                Some((c, r)) => (c, r.trim()),
                None => (line, ""),
            };
            match cmd {
                "done" => self.toggle(out, rest, true)?,
                "undo" => self.toggle(out, rest, false)?,
                "status" => self.status(out)?,
                "achievements" => self.achievements(out)?,
                "engagement" => self.engagement(out)?,
                "recommend" => self.recommend(out)?,
                "journal" => self.journal(out, rest)?,
                "feedback" => self.feedback(out, rest)?,
                "resources" => self.resources(out)?,
                "help" => self.help(out)?,
                "quit" | "exit" => break,
                other => writeln!(out, "unknown command '{other}' (try 'help')")?,
            }
        }
        Ok(())
    }

    fn render_steps<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Step Details and Completion Status:")?;
        for step in catalog::steps() {
            let marker = if self.state.is_completed(step.name, self.profile) {
                "✅"
            } else {
                "❌"
            };
            writeln!(out, "\n{}. {} {}", step.index, step.name, marker)?;
            writeln!(out, "   {}", step.description)?;
        }
        Ok(())
    }

    fn toggle<W: Write>(&mut self, out: &mut W, arg: &str, value: bool) -> anyhow::Result<()> {
        let Ok(index) = arg.parse::<usize>() else {
            writeln!(out, "expected a step number 1-10, got '{arg}'")?;
            return Ok(());
        };
        let Some(step) = catalog::by_index(index) else {
            writeln!(out, "no step {index}: steps are numbered 1-10")?;
            return Ok(());
        };
        self.state.set(step.name, self.profile, value);
        let marker = if value { "✅" } else { "❌" };
        writeln!(out, "{marker} {}", step.name)?;
        if value && self.state.is_complete(self.profile) {
            writeln!(
                out,
                "All 10 steps complete — you've earned Master Entrepreneur!"
            )?;
        }
        Ok(())
    }

    fn status<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let total = self.state.total_completed(self.profile);
        writeln!(out, "Completed {total} of 10 steps.\n")?;

        let rows: Vec<(String, u64)> = self
            .state
            .completion_series(self.profile)
            .into_iter()
            .map(|(name, completed)| (name.to_string(), u64::from(completed)))
            .collect();
        write!(out, "{}", bar_chart("Step Completion Progress", &rows, 10))?;

        writeln!(
            out,
            "\nCongratulations! You're making progress on starting your new business."
        )?;
        Ok(())
    }

    fn achievements<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let summary = self.state.summary(self.profile);
        writeln!(out, "Your Achievements:")?;
        writeln!(out, "Engagement Level: {}", self.profile.display_name())?;
        for badge in &summary.achievements {
            writeln!(out, "  {}: {}", badge.name, badge.criteria)?;
        }
        Ok(())
    }

    fn engagement<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(
            out,
            "User Engagement Analysis (profile: {}):",
            self.profile.display_name()
        )?;
        let points = engagement::sample();
        let views: Vec<(String, u64)> = points
            .iter()
            .map(|p| (p.index.to_string(), u64::from(p.page_views)))
            .collect();
        let minutes: Vec<(String, u64)> = points
            .iter()
            .map(|p| (p.index.to_string(), u64::from(p.time_spent_minutes)))
            .collect();
        write!(out, "{}", bar_chart("Page Views", &views, 40))?;
        write!(out, "{}", bar_chart("Time Spent (minutes)", &minutes, 40))?;
        Ok(())
    }

    fn recommend<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Personalized Recommendations:")?;
        for line in recommend::recommend(self.profile) {
            writeln!(out, "  {line}")?;
        }
        Ok(())
    }

    fn journal<W: Write>(&self, out: &mut W, text: &str) -> anyhow::Result<()> {
        if text.is_empty() {
            writeln!(out, "usage: journal <text>")?;
            return Ok(());
        }
        // Log failures are shown but never end the session.
        match journal::append(self.root, self.config, LogSink::Journal, text, None) {
            Ok(_) => writeln!(out, "Journal entry saved successfully!")?,
            Err(e) => writeln!(out, "could not save journal entry: {e}")?,
        }
        Ok(())
    }

    fn feedback<W: Write>(&self, out: &mut W, text: &str) -> anyhow::Result<()> {
        if text.is_empty() {
            writeln!(out, "usage: feedback <text>")?;
            return Ok(());
        }
        match journal::append(
            self.root,
            self.config,
            LogSink::Feedback,
            text,
            Some(self.name),
        ) {
            Ok(_) => writeln!(out, "Thank you for your feedback!")?,
            Err(e) => writeln!(out, "could not save feedback: {e}")?,
        }
        Ok(())
    }

    fn resources<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Additional Resources:")?;
        writeln!(out, "  - Small Business Administration: https://www.sba.gov/")?;
        writeln!(out, "  - SCORE - Business Mentoring: https://www.score.org/")?;
        writeln!(
            out,
            "  - Inc. Magazine - Starting a Business: https://www.inc.com/"
        )?;
        Ok(())
    }

    fn help<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  done <n>         mark step n completed")?;
        writeln!(out, "  undo <n>         mark step n not completed")?;
        writeln!(out, "  status           progress summary and chart")?;
        writeln!(out, "  achievements     unlocked badges")?;
        writeln!(out, "  engagement       engagement metric charts")?;
        writeln!(out, "  recommend        advice for your profile")?;
        writeln!(out, "  journal <text>   save a journal entry")?;
        writeln!(out, "  feedback <text>  send feedback")?;
        writeln!(out, "  resources        external links")?;
        writeln!(out, "  quit             end the session")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
