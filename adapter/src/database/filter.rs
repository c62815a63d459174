use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

/// How an activated filter compares its column against the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `column = $n`
    Equal,
    /// `column >= $n`
    AtLeast,
    /// `column <= $n`
    AtMost,
    /// `column ILIKE $n`, binding `%value%`
    Contains,
}

impl Comparison {
    fn operator(&self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::AtLeast => ">=",
            Comparison::AtMost => "<=",
            Comparison::Contains => "ILIKE",
        }
    }
}

/// Type the raw form value is parsed into before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Int,
    Decimal,
}

/// A declarative filter: one optional form field mapped onto one
/// predicate. Specs are applied in a fixed order so the emitted clause
/// list stays an order-preserving subsequence of the spec list.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub column: &'static str,
    pub comparison: Comparison,
    pub kind: ValueKind,
}

impl FilterSpec {
    pub const fn new(column: &'static str, comparison: Comparison, kind: ValueKind) -> Self {
        Self {
            column,
            comparison,
            kind,
        }
    }
}

/// A parsed value awaiting positional binding. Values are always bound,
/// never interpolated into the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Text(String),
    Int(i64),
    Decimal(Decimal),
}

/// Builds `<base> WHERE 1=1 [AND <predicate>]*` plus the matching
/// positional bind list. A filter is activated iff its form value is
/// present and non-empty after trimming; the string "0" activates.
#[derive(Debug)]
pub struct FilteredQuery {
    sql: String,
    binds: Vec<Bind>,
}

impl FilteredQuery {
    pub fn new(base: &str) -> Self {
        let mut sql = String::from(base.trim_end());
        sql.push_str(" WHERE 1=1");
        Self {
            sql,
            binds: Vec::new(),
        }
    }

    /// Applies one filter spec against the raw form value. Absent or
    /// blank values deactivate the filter; anything else is parsed per
    /// the declared kind and appended as `AND column op $n`.
    pub fn apply(&mut self, spec: &FilterSpec, value: Option<&str>) -> AppResult<()> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };

        let bind = match spec.kind {
            ValueKind::Text => {
                if spec.comparison == Comparison::Contains {
                    Bind::Text(format!("%{value}%"))
                } else {
                    Bind::Text(value.to_owned())
                }
            }
            ValueKind::Int => Bind::Int(value.parse().map_err(|_| {
                AppError::UnprocessableEntity(format!(
                    "{} expects an integer, got {value:?}",
                    spec.column
                ))
            })?),
            ValueKind::Decimal => Bind::Decimal(value.parse().map_err(|_| {
                AppError::UnprocessableEntity(format!(
                    "{} expects a number, got {value:?}",
                    spec.column
                ))
            })?),
        };

        self.binds.push(bind);
        self.sql.push_str(&format!(
            " AND {} {} ${}",
            spec.column,
            spec.comparison.operator(),
            self.binds.len()
        ));
        Ok(())
    }

    /// Applies an ordered list of (spec, raw value) pairs.
    pub fn apply_all<'a, I>(&mut self, filters: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (&'a FilterSpec, Option<&'a str>)>,
    {
        for (spec, value) in filters {
            self.apply(spec, value)?;
        }
        Ok(())
    }

    /// Appends a fixed trailing clause (ORDER BY etc.).
    pub fn push_suffix(&mut self, clause: &str) {
        self.sql.push(' ');
        self.sql.push_str(clause);
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }

    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<_, T>(&self.sql);
        for bind in &self.binds {
            query = match bind {
                Bind::Text(v) => query.bind(v.clone()),
                Bind::Int(v) => query.bind(*v),
                Bind::Decimal(v) => query.bind(*v),
            };
        }
        query.fetch_all(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: FilterSpec =
        FilterSpec::new("rooms.capacity", Comparison::Equal, ValueKind::Int);
    const PRICE: FilterSpec = FilterSpec::new("rooms.price", Comparison::AtMost, ValueKind::Decimal);
    const CITY: FilterSpec = FilterSpec::new("hotels.city", Comparison::Equal, ValueKind::Text);
    const STARS: FilterSpec = FilterSpec::new("hotels.stars", Comparison::AtLeast, ValueKind::Int);
    const FIRST_NAME: FilterSpec = FilterSpec::new(
        "customers.first_name",
        Comparison::Contains,
        ValueKind::Text,
    );

    #[test]
    fn no_active_filters_yields_base_query() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply_all([
            (&CAPACITY, None),
            (&PRICE, Some("")),
            (&CITY, Some("   ")),
        ])
        .unwrap();
        assert_eq!(q.sql(), "SELECT * FROM rooms WHERE 1=1");
        assert!(q.binds().is_empty());
    }

    #[test]
    fn single_filter_binds_single_value() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply_all([(&CAPACITY, Some("2")), (&PRICE, Some(""))])
            .unwrap();
        assert_eq!(q.sql(), "SELECT * FROM rooms WHERE 1=1 AND rooms.capacity = $1");
        assert_eq!(q.binds(), &[Bind::Int(2)]);
    }

    #[test]
    fn clause_order_follows_spec_order() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply_all([
            (&STARS, Some("3")),
            (&CITY, None),
            (&CAPACITY, Some("4")),
            (&PRICE, Some("150.00")),
        ])
        .unwrap();
        assert_eq!(
            q.sql(),
            "SELECT * FROM rooms WHERE 1=1 \
             AND hotels.stars >= $1 \
             AND rooms.capacity = $2 \
             AND rooms.price <= $3"
        );
        assert_eq!(
            q.binds(),
            &[
                Bind::Int(3),
                Bind::Int(4),
                Bind::Decimal("150.00".parse().unwrap())
            ]
        );
    }

    #[test]
    fn zero_is_an_active_value() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply(&CAPACITY, Some("0")).unwrap();
        assert_eq!(q.binds(), &[Bind::Int(0)]);
    }

    #[test]
    fn contains_wraps_value_in_wildcards() {
        let mut q = FilteredQuery::new("SELECT * FROM bookings");
        q.apply(&FIRST_NAME, Some("ann")).unwrap();
        assert_eq!(
            q.sql(),
            "SELECT * FROM bookings WHERE 1=1 AND customers.first_name ILIKE $1"
        );
        assert_eq!(q.binds(), &[Bind::Text("%ann%".into())]);
    }

    #[test]
    fn values_are_bound_not_interpolated() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply(&CITY, Some("x'; DROP TABLE rooms; --")).unwrap();
        // the hostile value lands in the bind list, never in the SQL text
        assert_eq!(q.sql(), "SELECT * FROM rooms WHERE 1=1 AND hotels.city = $1");
        assert_eq!(q.binds(), &[Bind::Text("x'; DROP TABLE rooms; --".into())]);
    }

    #[test]
    fn non_numeric_value_for_numeric_filter_is_rejected() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        assert!(q.apply(&CAPACITY, Some("two")).is_err());
    }

    #[test]
    fn suffix_lands_after_all_predicates() {
        let mut q = FilteredQuery::new("SELECT * FROM rooms");
        q.apply(&CAPACITY, Some("2")).unwrap();
        q.push_suffix("ORDER BY rooms.room_number");
        assert_eq!(
            q.sql(),
            "SELECT * FROM rooms WHERE 1=1 AND rooms.capacity = $1 ORDER BY rooms.room_number"
        );
    }
}
