//! Fecha usada para nombrar los documentos exportados.

use chrono::{NaiveDate, Utc};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Fecha actual en UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Reloj detenido en una fecha, útil para resultados reproducibles.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
