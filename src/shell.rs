//! Line-oriented interactive session over a `ReliefGraph`

use crate::config::ShellConfig;
use crate::render;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use relief_core::{CampId, ConnectOutcome, CostInputs, GraphError, INFINITE, ReliefGraph};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Who is logged in to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Admin,
    CampHead(CampId),
    User,
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Parser, Debug)]
#[command(
    name = "relief",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Log in as admin, camp head or user
    Login {
        #[command(subcommand)]
        role: LoginRole,
    },
    /// Return to the guest role
    Logout,
    /// Register or replace a camp (admin)
    Camp {
        id: u32,
        name: String,
        address: String,
        contact: String,
    },
    /// List registered camps (admin)
    Camps,
    /// Connect two camps, optionally with a known cost (admin)
    Connect {
        src: u32,
        dest: u32,
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<i64>,
    },
    /// Cost an existing connection from field measurements (camp head)
    Cost {
        src: u32,
        dest: u32,
        #[arg(long, allow_negative_numbers = true)]
        distance: i64,
        #[arg(long, allow_negative_numbers = true)]
        water_level: i64,
    },
    /// Set your camp's need value (camp head)
    Need {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Record a resource held by your camp (camp head)
    Resource {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show camps connected to yours (camp head)
    Nearby,
    /// Show the minimum-cost backbone (admin)
    Mst,
    /// Find the closest camp to a location
    Nearest { from: u32 },
    /// Show distances from a camp to every camp
    Distances { from: u32 },
    /// Show the cheapest route between two camps
    Route { from: u32, to: u32 },
    /// Show this help
    Help,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum LoginRole {
    Admin { secret: String },
    Head { camp: u32 },
    User { secret: String },
}

pub struct Session {
    graph: ReliefGraph,
    config: ShellConfig,
    role: Role,
    json: bool,
}

impl Session {
    pub fn new(graph: ReliefGraph, config: ShellConfig, json: bool) -> Self {
        Self {
            graph,
            config,
            role: Role::Guest,
            json,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn graph(&self) -> &ReliefGraph {
        &self.graph
    }

    /// Read commands until end of input or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        write!(out, "relief> ")?;
        out.flush()?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
            write!(out, "relief> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Execute one input line. Engine failures are reported to `out`
    /// and never end the session.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match Line::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                debug!("Unparsed input {:?}: {:?}", line, e.kind());
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.dispatch(command, out) {
            Ok(flow) => Ok(flow),
            Err(e) => match e.downcast::<GraphError>() {
                Ok(graph_error) => {
                    warn!("Command failed: {}", graph_error);
                    writeln!(out, "{}", graph_error)?;
                    Ok(Flow::Continue)
                }
                Err(other) => Err(other),
            },
        }
    }

    fn dispatch(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow> {
        match command {
            ShellCommand::Login { role } => self.login(role, out)?,
            ShellCommand::Logout => {
                self.role = Role::Guest;
                writeln!(out, "Logged out.")?;
            }
            ShellCommand::Camp { id, name, address, contact } => {
                if self.require_admin(out)? {
                    self.graph.register_camp(CampId(id), name, address, contact);
                    writeln!(out, "Camp added!")?;
                }
            }
            ShellCommand::Camps => {
                if self.require_admin(out)? {
                    render::camps(out, self.graph.camps(), self.json)?;
                }
            }
            ShellCommand::Connect { src, dest, weight } => {
                if self.require_admin(out)? {
                    let outcome = self.graph.connect(
                        CampId(src),
                        CampId(dest),
                        weight.unwrap_or(INFINITE),
                        false,
                    )?;
                    match outcome {
                        ConnectOutcome::Inserted => writeln!(
                            out,
                            "Edge added successfully between camp {} and camp {}",
                            src, dest
                        )?,
                        ConnectOutcome::Updated { .. } => writeln!(
                            out,
                            "Edge updated between camp {} and camp {}",
                            src, dest
                        )?,
                    }
                }
            }
            ShellCommand::Cost { src, dest, distance, water_level } => {
                if self.require_camp_head(out)?.is_some() {
                    let inputs = CostInputs { distance, water_level };
                    let weight = self.graph.assign_cost(
                        CampId(src),
                        CampId(dest),
                        inputs,
                        &self.config.cost,
                    )?;
                    writeln!(
                        out,
                        "Cost added successfully between camp {} and camp {} (cost {})",
                        src, dest, weight
                    )?;
                }
            }
            ShellCommand::Need { value } => {
                if let Some(camp) = self.require_camp_head(out)? {
                    self.graph.set_need(camp, value)?;
                    writeln!(out, "Need value for camp {} set to {}", camp, value)?;
                }
            }
            ShellCommand::Resource { name, quantity } => {
                if let Some(camp) = self.require_camp_head(out)? {
                    self.graph.add_resource(camp, name.as_str(), quantity)?;
                    writeln!(out, "Recorded {} x {} at camp {}", quantity, name, camp)?;
                }
            }
            ShellCommand::Nearby => {
                if let Some(camp) = self.require_camp_head(out)? {
                    let nearby = self.graph.neighbors_of(camp);
                    if !self.json {
                        writeln!(out, "Nearby camps:")?;
                    }
                    render::camps(
                        out,
                        nearby.iter().filter_map(|&id| self.graph.camp(id)),
                        self.json,
                    )?;
                }
            }
            ShellCommand::Mst => {
                if self.require_admin(out)? {
                    render::mst(out, &self.graph.spanning_forest(), self.json)?;
                }
            }
            ShellCommand::Nearest { from } => {
                if self.require_login(out)? {
                    let found = self.graph.nearest_camp(CampId(from))?;
                    let found = found.and_then(|(id, d)| self.graph.camp(id).map(|c| (c, d)));
                    render::nearest(out, found, self.json)?;
                }
            }
            ShellCommand::Distances { from } => {
                if self.require_login(out)? {
                    let table = self.graph.shortest_distances(CampId(from))?;
                    render::distances(out, CampId(from), &table, self.json)?;
                }
            }
            ShellCommand::Route { from, to } => {
                if self.require_login(out)? {
                    let route = self.graph.shortest_route(CampId(from), CampId(to))?;
                    render::route(out, route.as_ref(), self.json)?;
                }
            }
            ShellCommand::Help => {
                write!(out, "{}", Line::command().render_long_help())?;
            }
            ShellCommand::Quit => {
                writeln!(out, "Exiting ...")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn login(&mut self, role: LoginRole, out: &mut impl Write) -> Result<()> {
        match role {
            LoginRole::Admin { secret } if secret == self.config.admin_secret => {
                self.role = Role::Admin;
                writeln!(out, "=====LOGGED IN AS ADMIN=====")?;
            }
            LoginRole::User { secret } if secret == self.config.user_secret => {
                self.role = Role::User;
                writeln!(out, "=====LOGGED IN AS USER=====")?;
            }
            LoginRole::Head { camp } if self.graph.camp(CampId(camp)).is_some() => {
                self.role = Role::CampHead(CampId(camp));
                writeln!(out, "=====LOGGED IN=====")?;
            }
            LoginRole::Head { .. } => {
                writeln!(out, "Invalid camp number!")?;
                return Ok(());
            }
            LoginRole::Admin { .. } | LoginRole::User { .. } => {
                warn!("Rejected login attempt");
                writeln!(out, "Invalid password!")?;
                return Ok(());
            }
        }
        info!("Session role is now {:?}", self.role);
        Ok(())
    }

    fn require_admin(&self, out: &mut impl Write) -> Result<bool> {
        if self.role == Role::Admin {
            return Ok(true);
        }
        writeln!(out, "Permission denied: log in as admin first.")?;
        Ok(false)
    }

    fn require_camp_head(&self, out: &mut impl Write) -> Result<Option<CampId>> {
        if let Role::CampHead(camp) = self.role {
            return Ok(Some(camp));
        }
        writeln!(out, "Permission denied: log in as a camp head first.")?;
        Ok(None)
    }

    fn require_login(&self, out: &mut impl Write) -> Result<bool> {
        if self.role != Role::Guest {
            return Ok(true);
        }
        writeln!(out, "Permission denied: log in first.")?;
        Ok(false)
    }
}
