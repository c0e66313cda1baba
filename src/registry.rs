use crate::tunable::Tunable;

use log::{debug, warn};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::{self, Write};

/// A set of parameter names whose update forces a dependent recomputation
/// (e.g. rebuilding the engine's reduction table).
struct Trigger {
    names: Vec<&'static str>,
    action: Box<dyn FnMut()>,
}

/// Ordered collection of tunables with name-keyed access.
///
/// The parameter set is fixed at construction; only `set` mutates values
/// afterwards. Every report format walks the parameters in construction
/// order, so the controller sees a stable listing.
pub struct Registry {
    params: Vec<Tunable>,
    triggers: Vec<Trigger>,
}

impl Registry {
    /// Creates a registry over an ordered parameter set.
    pub fn new(params: Vec<Tunable>) -> Self {
        Registry {
            params: params,
            triggers: Vec::new(),
        }
    }

    /// Registers a recomputation callback fired whenever one of <names>
    /// is updated through `set`.
    pub fn on_change(&mut self, names: Vec<&'static str>, action: impl FnMut() + 'static) {
        self.triggers.push(Trigger {
            names: names,
            action: Box::new(action),
        });
    }

    /// Looks up a tunable by exact name.
    pub fn get(&self, name: &str) -> Option<&Tunable> {
        self.params.iter().find(|t| t.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Tunable> {
        self.params.iter_mut().find(|t| t.name == name)
    }

    /// Updates a tunable from its externally-scaled integer value.
    ///
    /// Fires every trigger declared over <name> before returning, so the
    /// caller observes fully recomputed dependent state. On an unknown
    /// name, writes the failure diagnostic and mutates nothing.
    pub fn set(&mut self, name: &str, value: i64, out: &mut impl Write) -> io::Result<()> {
        match self.get_mut(name) {
            Some(t) => t.set_external(value),
            None => {
                warn!("Ignoring update to unknown tunable {}", name);
                return writeln!(out, "No Such Tunable");
            }
        }

        debug!("Set tunable {} = {}", name, value);

        for trigger in &mut self.triggers {
            if trigger.names.iter().any(|&n| n == name) {
                (trigger.action)();
            }
        }

        Ok(())
    }

    /// Writes a single tunable's internal value, as the search consumes it.
    pub fn read_one(&self, name: &str, out: &mut impl Write) -> io::Result<()> {
        match self.get(name) {
            Some(t) => writeln!(out, "value: {}", t.value()),
            None => writeln!(out, "No Such Tunable"),
        }
    }

    /// Writes every tunable's full metadata in registry order.
    pub fn read_all(&self, out: &mut impl Write) -> io::Result<()> {
        for t in &self.params {
            writeln!(out, "name: {}", t.name)?;
            writeln!(out, "value: {}", t.value())?;
            writeln!(out, "min: 0")?;
            writeln!(out, "max: {}", t.max)?;
            writeln!(out, "divisor: {}", t.divisor)?;
            writeln!(out, "step: {}", t.step)?;
        }

        Ok(())
    }

    /// Produces the option declaration lines advertised to the controller,
    /// one per tunable in registry order. The iterator is lazy and may be
    /// regenerated at any time.
    pub fn options(&self) -> impl Iterator<Item = String> + '_ {
        self.params.iter().map(|t| {
            format!(
                "option name {} type spin default {} min 0 max {}",
                t.name,
                t.external_value(),
                t.max
            )
        })
    }

    /// Writes every option declaration line.
    pub fn write_options(&self, out: &mut impl Write) -> io::Result<()> {
        for line in self.options() {
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }

    /// Writes a JSON snapshot of the current tuning state, keyed by
    /// tunable name in registry order.
    pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &Snapshot(&self.params))?;
        writeln!(out)
    }
}

/// Point-in-time view of the registry in the shape the external tuning
/// harness parses.
struct Snapshot<'a>(&'a [Tunable]);

#[derive(Serialize)]
struct SnapshotEntry {
    value: i64,
    min_value: i64,
    max_value: i64,
    step: i64,
}

impl<'a> Serialize for Snapshot<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for t in self.0 {
            map.serialize_entry(
                t.name,
                &SnapshotEntry {
                    value: t.external_value(),
                    min_value: 0,
                    max_value: t.max,
                    step: t.step,
                },
            )?;
        }

        map.end()
    }
}
