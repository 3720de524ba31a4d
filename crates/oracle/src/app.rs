//! Command execution and report formatting.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use kinematics::scenario::ContactReport;
use kinematics::trajectory::Sample;
use kinematics::{trajectory, PhysicalObject, Scenario};
use serde_json::json;
use tracing::info;

use crate::{BodyArgs, Command};

const COL_OBJ: usize = 10;
const COL_TIME: usize = 14;
const COL_VEC: usize = 40;
const COL_VERDICT: usize = 26;
const COL_POSITION: usize = 16;

impl BodyArgs {
    fn object(&self) -> PhysicalObject {
        PhysicalObject::with_gravity(self.position, self.velocity, self.boundary, self.gravity)
    }
}

/// Run one subcommand, printing its result on stdout.
///
/// # Errors
///
/// Returns scenario loading, override validation, sampling and I/O errors.
pub fn run(command: Command) -> Result<()> {
    let out = match command {
        Command::Solve {
            body,
            vertical_only,
            json,
        } => solve(&body.object(), vertical_only, json)?,
        Command::Scenario {
            source,
            gravity,
            timestep,
            json,
        } => scenario(&source, gravity, timestep, json)?,
        Command::Trajectory { body, dt, raw } => sample(&body.object(), dt, raw.as_deref())?,
    };
    print!("{out}");
    Ok(())
}

fn solve(object: &PhysicalObject, vertical_only: bool, as_json: bool) -> Result<String> {
    let (time, relative, contact) = if vertical_only {
        let eq = object.vertical_equation();
        let time = eq.time_of_ground_contact();
        (time, json!(eq.position_at_ground_contact()), json!(object.position_at(time).z))
    } else {
        let eq = object.equation();
        let time = eq.time_of_ground_contact();
        (time, json!(eq.position_at_ground_contact()), json!(object.position_at(time)))
    };

    let mut out = String::new();
    if as_json {
        let value = json!({
            "time": time,
            "relative_position": relative,
            "contact_point": contact,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "time of ground contact: {time} s")?;
        writeln!(out, "position relative to boundary: {relative}")?;
        writeln!(out, "contact point: {contact}")?;
    }
    Ok(out)
}

fn scenario(source: &str, gravity: Option<f64>, timestep: Option<f64>, as_json: bool) -> Result<String> {
    let mut scenario = Scenario::resolve(source)
        .with_context(|| format!("could not resolve scenario {source:?}"))?;
    if let Some(g) = gravity {
        scenario = scenario.with_gravity(g);
    }
    if let Some(dt) = timestep {
        scenario = scenario.with_timestep(dt)?;
    }
    info!(
        "Scenario {:?}: gravity {} m/s², timestep {} s",
        scenario.name, scenario.gravity, scenario.timestep
    );

    let reports = scenario.report();
    if as_json {
        Ok(serde_json::to_string_pretty(&reports)? + "\n")
    } else {
        format_table(&reports).map_err(Into::into)
    }
}

fn write_row(out: &mut String, cells: [&str; 5]) -> fmt::Result {
    let [name, time, contact, verdict, position] = cells;
    writeln!(
        out,
        "{name:<COL_OBJ$}{time:<COL_TIME$}{contact:<COL_VEC$}{verdict:<COL_VERDICT$}{position:<COL_POSITION$}"
    )
}

fn format_table(reports: &[ContactReport]) -> Result<String, fmt::Error> {
    let width = COL_OBJ + COL_TIME + COL_VEC + COL_VERDICT + COL_POSITION;
    let mut out = String::new();
    write_row(
        &mut out,
        ["Object", "Time(s)", "Contact(x,y,z)", "Simulated time", "Simulated pos"],
    )?;
    writeln!(out, "{}", "-".repeat(width))?;
    for report in reports {
        let verdict = report.check.as_ref().map_or_else(
            || "-".to_string(),
            |check| format!("{} ({:+.4})", check.verdict(), check.difference()),
        );
        let position = report
            .position_check
            .as_ref()
            .map_or_else(|| "-".to_string(), |check| check.verdict().to_string());
        write_row(
            &mut out,
            [
                report.name.as_str(),
                format!("{:.6}", report.time).as_str(),
                format!("{:.6}", report.position).as_str(),
                verdict.as_str(),
                position.as_str(),
            ],
        )?;
    }
    Ok(out)
}

fn write_raw(path: &Path, samples: &[Sample]) -> Result<()> {
    std::fs::write(path, trajectory::as_bytes(samples))
        .with_context(|| format!("failed to write {}", path.display()))
}

/// JSON samples, or nothing when they were written to `raw` instead.
fn sample(object: &PhysicalObject, dt: f64, raw: Option<&Path>) -> Result<String> {
    let samples = trajectory::sample_until_contact(object, dt)
        .with_context(|| format!("could not sample trajectory at dt = {dt}"))?;
    info!(
        "{} samples up to t = {} s",
        samples.len(),
        object.time_of_ground_contact()
    );
    match raw {
        Some(path) => {
            write_raw(path, &samples)?;
            Ok(String::new())
        }
        None => Ok(serde_json::to_string_pretty(&samples)? + "\n"),
    }
}
