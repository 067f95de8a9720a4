//! Interactive session: facets, engine and table wired together.

use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use facet_lib::{Collaborators, FacetConfig, FacetQuery, ListFacet, ListFacetOptions};
use facetdom::{Container, Event, Line, Rgb, Span};
use log::{debug, info, warn};

use crate::dataset::Dataset;
use crate::engine::Engine;
use crate::error::{CliError, Result};
use crate::table::{format_rows, TableView};

const HELP: &str = "\
commands:
  <n>                      activate link [n]
  scroll <facet> <delta>   scroll a facet's choices
  json                     print every facet query
  rows                     print matching rows
  help                     show this help
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(usize),
    Scroll { facet: String, delta: i16 },
    Json,
    Rows,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let unknown = || CliError::UnknownCommand(s.trim().to_string());

        let command = match words.next().ok_or_else(unknown)? {
            "json" => Self::Json,
            "rows" => Self::Rows,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            "scroll" => {
                let facet = words.next().ok_or_else(unknown)?.to_string();
                let delta = words
                    .next()
                    .and_then(|d| d.parse().ok())
                    .ok_or_else(unknown)?;
                Self::Scroll { facet, delta }
            }
            word => Self::Click(word.parse().map_err(|_| unknown())?),
        };

        if words.next().is_some() {
            return Err(unknown());
        }
        Ok(command)
    }
}

pub struct App {
    columns: Vec<String>,
    engine: Rc<Engine>,
    table: Rc<TableView>,
    facets: Vec<ListFacet>,
    /// Links numbered by the last draw: (facet index, element id).
    targets: Vec<(usize, String)>,
}

impl App {
    pub fn new(dataset: Dataset, columns: Vec<String>, options: ListFacetOptions) -> Self {
        let engine = Rc::new(Engine::new(Rc::new(dataset)));
        let table = Rc::new(TableView::new());
        let collaborators = Collaborators::new(engine.clone(), table.clone());

        let facets = columns
            .iter()
            .map(|column| {
                ListFacet::new(
                    Container::new(column.clone()),
                    FacetConfig::for_column(column.clone()),
                    options.clone(),
                    collaborators.clone(),
                )
            })
            .collect();

        Self {
            columns,
            engine,
            table,
            facets,
            targets: Vec::new(),
        }
    }

    /// Load the first round of choice data.
    pub fn start(&mut self) {
        info!("starting with {} facets", self.facets.len());
        self.engine.refresh(&mut self.facets);
    }

    #[cfg(test)]
    pub fn facets(&self) -> &[ListFacet] {
        &self.facets
    }

    pub fn queries(&self) -> Vec<FacetQuery> {
        self.facets.iter().map(ListFacet::get_json).collect()
    }

    /// Run one command. Returns false when the session should end.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        debug!("command {command:?}");
        match command {
            Command::Quit => return Ok(false),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Json => {
                for query in self.queries() {
                    writeln!(out, "{}", query.to_json_string()?)?;
                }
            }
            Command::Rows => self.write_rows(out)?,
            Command::Click(n) => match n.checked_sub(1).and_then(|i| self.targets.get(i)) {
                Some((facet, id)) => {
                    let id = id.clone();
                    if !self.facets[*facet].click(&id) {
                        warn!("link {n} ({id}) has no action");
                    }
                    self.settle(out)?;
                    self.draw(out)?;
                }
                None => writeln!(out, "no link [{n}]")?,
            },
            Command::Scroll { facet, delta } => {
                let facet = self
                    .facets
                    .iter_mut()
                    .find(|f| f.container().id() == facet)
                    .ok_or(CliError::UnknownFacet(facet))?;
                let body = facet.body_id();
                facet.handle_event(&Event::scroll(body, delta));
                self.draw(out)?;
            }
        }
        Ok(true)
    }

    /// Deliver the refreshes collaborators asked for during the last command.
    fn settle(&mut self, out: &mut impl Write) -> Result<()> {
        if self.engine.take_pending() {
            self.engine.refresh(&mut self.facets);
        }
        if let Some(force) = self.table.take_pending() {
            debug!("table refresh (force: {force})");
            self.write_rows(out)?;
        }
        Ok(())
    }

    fn write_rows(&self, out: &mut impl Write) -> Result<()> {
        let queries = self.queries();
        let rows = self.engine.matching_rows(&queries);
        for line in format_rows(&rows, &self.columns) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Print every facet, numbering its links.
    pub fn draw(&mut self, out: &mut impl Write) -> Result<()> {
        self.targets.clear();
        for (index, facet) in self.facets.iter().enumerate() {
            let lines = facet.container().lines();
            let width = lines.iter().map(Line::width).max().unwrap_or(0);
            for line in &lines {
                for span in &line.spans {
                    if let Some(target) = &span.target {
                        self.targets.push((index, target.clone()));
                        queue!(out, Print(format!("[{}]", self.targets.len())))?;
                    }
                    write_span(out, span)?;
                }
                queue!(out, Print("\n"))?;
            }
            queue!(out, Print("─".repeat(width.max(1))), Print("\n"))?;
        }
        out.flush()?;
        Ok(())
    }
}

fn write_span(out: &mut impl Write, span: &Span) -> Result<()> {
    let style = &span.style.text_style;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if let Some(rgb) = span.style.foreground.as_ref().and_then(|c| c.resolve(palette)) {
        queue!(
            out,
            SetForegroundColor(TermColor::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b
            })
        )?;
    }
    queue!(out, Print(&span.text), ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn palette(name: &str) -> Option<Rgb> {
    match name {
        "link" => Some(Rgb::new(97, 175, 239)),
        "muted" => Some(Rgb::new(128, 128, 128)),
        _ => None,
    }
}
