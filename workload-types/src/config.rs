use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Largest number of clients the harness accepts.
pub const MAX_CLIENTS: u32 = 40;

pub const PRICE_RANGE: RangeInclusive<u32> = 50..=500;

pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=100;

/// An operator-supplied parameter of a multi-client workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Clients,
    Instruments,
    Orders,
}

impl Field {
    /// Question asked when the value is read interactively.
    pub const fn prompt(self) -> &'static str {
        match self {
            Field::Clients => "Enter number of clients (1-40): ",
            Field::Instruments => "Enter number of instruments: ",
            Field::Orders => "Enter number of orders: ",
        }
    }

    /// Parses an operator answer. The value is validated by [`Config`].
    pub fn parse(self, input: &str) -> Result<i64, ConfigError> {
        let input = input.trim();
        input.parse::<i64>().map_err(|_| ConfigError::NotANumber {
            field: self,
            input: input.to_owned(),
        })
    }

    /// Validates a value of this field.
    pub fn check(self, value: i64) -> Result<u32, ConfigError> {
        match self {
            Field::Clients
                if !(1..=i64::from(MAX_CLIENTS)).contains(&value) =>
            {
                Err(ConfigError::ClientsOutOfRange(value))
            }
            Field::Instruments if value < 1 => Err(ConfigError::NoInstruments),
            Field::Orders if value < 1 => Err(ConfigError::NoOrders),
            _ => u32::try_from(value)
                .map_err(|_| ConfigError::TooLarge { field: self, value }),
        }
    }
}

impl fmt::Display for Field {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Clients => "number of clients",
            Field::Instruments => "number of instruments",
            Field::Orders => "number of orders",
        })
    }
}

/// Validated parameters of a multi-client workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    num_clients: u32,
    num_instruments: u32,
    num_orders: u32,
}

impl Config {
    /// Constructs a new `Config`, returning an error if any parameter is out
    /// of its accepted range.
    pub fn new(
        num_clients: i64,
        num_instruments: i64,
        num_orders: i64,
    ) -> Result<Self, ConfigError> {
        Self::read(|field| {
            Ok(match field {
                Field::Clients => num_clients,
                Field::Instruments => num_instruments,
                Field::Orders => num_orders,
            })
        })
    }

    /// Builds a `Config` from values fetched one field at a time, in
    /// clients, instruments, orders order.
    ///
    /// Each value is validated right after being fetched, so a rejected
    /// field stops before the next one is asked for.
    pub fn read<F, E>(mut value_of: F) -> Result<Self, E>
    where
        F: FnMut(Field) -> Result<i64, E>,
        E: From<ConfigError>,
    {
        let mut next = |field: Field| -> Result<u32, E> {
            let value = value_of(field)?;
            Ok(field.check(value)?)
        };

        Ok(Self {
            num_clients: next(Field::Clients)?,
            num_instruments: next(Field::Instruments)?,
            num_orders: next(Field::Orders)?,
        })
    }

    #[inline]
    pub const fn num_clients(&self) -> u32 {
        self.num_clients
    }

    #[inline]
    pub const fn num_instruments(&self) -> u32 {
        self.num_instruments
    }

    #[inline]
    pub const fn num_orders(&self) -> u32 {
        self.num_orders
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use assert2::let_assert;

    use super::*;

    #[test]
    fn accepts_bounds() {
        let_assert!(Ok(config) = Config::new(1, 1, 1));
        assert!(config.num_clients() == 1);

        let_assert!(Ok(config) = Config::new(40, 3, 5_000));
        assert!(config.num_clients() == 40);
        assert!(config.num_instruments() == 3);
        assert!(config.num_orders() == 5_000);
    }

    #[test]
    fn rejects_out_of_range_clients() {
        assert!(Config::new(0, 1, 1) == Err(ConfigError::ClientsOutOfRange(0)));
        assert!(
            Config::new(41, 1, 1) == Err(ConfigError::ClientsOutOfRange(41))
        );
        assert!(
            Config::new(-2, 1, 1) == Err(ConfigError::ClientsOutOfRange(-2))
        );
    }

    #[test]
    fn rejects_missing_instruments_and_orders() {
        assert!(Config::new(2, 0, 1) == Err(ConfigError::NoInstruments));
        assert!(Config::new(2, 1, 0) == Err(ConfigError::NoOrders));
        assert!(Config::new(2, 1, -10) == Err(ConfigError::NoOrders));
    }

    #[test]
    fn clients_are_checked_first() {
        assert!(Config::new(0, 0, 0) == Err(ConfigError::ClientsOutOfRange(0)));
    }

    #[test]
    fn parses_operator_answers() {
        assert!(Field::Clients.parse(" 12\n") == Ok(12));
        assert!(Field::Orders.parse("-3") == Ok(-3));
        assert!(
            Field::Instruments.parse("many")
                == Err(ConfigError::NotANumber {
                    field: Field::Instruments,
                    input: "many".to_owned(),
                })
        );
        assert!(
            Field::Orders.check(99_999_999_999)
                == Err(ConfigError::TooLarge {
                    field: Field::Orders,
                    value: 99_999_999_999,
                })
        );
    }

    #[test]
    fn diagnostics() {
        assert!(
            ConfigError::ClientsOutOfRange(41).to_string()
                == "number of clients must be between 1 and 40 (found 41)"
        );
        assert!(
            Field::Clients.parse("x").unwrap_err().to_string()
                == "number of clients must be an integer (found \"x\")"
        );
    }

    #[test]
    fn read_stops_at_first_rejected_field() {
        let mut asked = Vec::new();

        let result = Config::read(|field| {
            asked.push(field);
            Ok::<_, ConfigError>(match field {
                Field::Clients => 41,
                _ => 1,
            })
        });

        assert!(result == Err(ConfigError::ClientsOutOfRange(41)));
        assert!(asked == [Field::Clients]);
    }

    #[test]
    fn read_checks_each_field_once() {
        let mut asked = Vec::new();

        let result = Config::read(|field| {
            asked.push(field);
            Ok::<_, ConfigError>(match field {
                Field::Clients => 4,
                Field::Instruments => 2,
                Field::Orders => 9,
            })
        });

        let_assert!(Ok(config) = result);
        assert!(config.num_clients() == 4);
        assert!(config.num_instruments() == 2);
        assert!(config.num_orders() == 9);
        assert!(asked == [Field::Clients, Field::Instruments, Field::Orders]);
    }
}
