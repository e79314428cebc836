//! Column-oriented event table.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::CatalogSection;
use crate::error::{Error, Result};

use super::column::Column;
use super::event::Event;

/// Serialized form of one column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedColumn {
    /// Column name
    pub name: String,
    /// Column values
    pub values: Column,
}

/// Table of events with named, equal-length columns.
///
/// Column order is insertion order and is preserved by every operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamedColumn>", into = "Vec<NamedColumn>")]
pub struct EventCatalog {
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl EventCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, builder style.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<Self> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// Add a column.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.names.iter().any(|n| *n == name) {
            return Err(Error::schema(&name, "duplicate column"));
        }
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(Error::schema(
                &name,
                format!("expected {} rows, got {}", self.rows, column.len()),
            ));
        }

        self.rows = column.len();
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Build a catalog from typed events using the configured column names.
    pub fn from_events(events: &[Event], fields: &CatalogSection) -> Result<Self> {
        Self::new()
            .with_column(
                fields.x_field.as_str(),
                events.iter().map(|e| e.x).collect::<Vec<_>>(),
            )?
            .with_column(
                fields.y_field.as_str(),
                events.iter().map(|e| e.y).collect::<Vec<_>>(),
            )?
            .with_column(
                fields.z_field.as_str(),
                events.iter().map(|e| e.z).collect::<Vec<_>>(),
            )?
            .with_column(
                fields.count_field.as_str(),
                events.iter().map(|e| e.num_obs).collect::<Vec<_>>(),
            )
    }

    /// Read the catalog back as typed events.
    pub fn events(&self, fields: &CatalogSection) -> Result<Vec<Event>> {
        let x = self.coordinates(&fields.x_field)?;
        let y = self.coordinates(&fields.y_field)?;
        let z = self.coordinates(&fields.z_field)?;
        let counts = self.counts(&fields.count_field)?;

        Ok((0..self.rows)
            .map(|r| Event::new(x[r], y[r], z[r], counts[r]))
            .collect())
    }

    // === Basic Properties ===

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows
    }

    /// True if the catalog has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| &self.columns[idx])
    }

    // === Typed Access ===

    /// Coordinate values of a float or integer column.
    pub fn coordinates(&self, name: &str) -> Result<Cow<'_, [f64]>> {
        match self.column(name) {
            Some(Column::Float(v)) => Ok(Cow::Borrowed(v.as_slice())),
            Some(Column::Int(v)) => Ok(Cow::Owned(v.iter().map(|&n| n as f64).collect())),
            None => Err(Error::schema(name, "column not found")),
        }
    }

    /// Values of an integer column.
    pub fn counts(&self, name: &str) -> Result<&[i64]> {
        match self.column(name) {
            Some(Column::Int(v)) => Ok(v.as_slice()),
            Some(other) => Err(Error::schema(
                name,
                format!("expected int column, found {}", other.type_name()),
            )),
            None => Err(Error::schema(name, "column not found")),
        }
    }

    /// New catalog holding the given rows, in the given order.
    ///
    /// Every index must be below [`len`](Self::len).
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.select(rows)).collect(),
            rows: rows.len(),
        }
    }
}

impl TryFrom<Vec<NamedColumn>> for EventCatalog {
    type Error = Error;

    fn try_from(columns: Vec<NamedColumn>) -> Result<Self> {
        let mut catalog = Self::new();
        for NamedColumn { name, values } in columns {
            catalog.push_column(name, values)?;
        }
        Ok(catalog)
    }
}

impl From<EventCatalog> for Vec<NamedColumn> {
    fn from(catalog: EventCatalog) -> Self {
        catalog
            .names
            .into_iter()
            .zip(catalog.columns)
            .map(|(name, values)| NamedColumn { name, values })
            .collect()
    }
}
