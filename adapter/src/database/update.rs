use super::filter::Bind;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

/// Builds `UPDATE <table> SET a = $1, b = $2 WHERE <key> = $n` from
/// optional form fields. Only fields with a non-empty trimmed value make
/// it into the SET list, mirroring the activation rule of the filtered
/// query builder.
#[derive(Debug)]
pub struct PartialUpdate {
    table: &'static str,
    assignments: Vec<String>,
    binds: Vec<Bind>,
}

impl PartialUpdate {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            binds: Vec::new(),
        }
    }

    pub fn set_text(&mut self, column: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.binds.push(Bind::Text(value.to_owned()));
            self.assignments
                .push(format!("{column} = ${}", self.binds.len()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finishes the statement with a key predicate and a RETURNING
    /// clause. Returns `None` when no field was set, so the caller can
    /// reject the empty update before touching the database.
    pub fn into_statement(
        self,
        key_column: &str,
        key: i64,
        returning: &str,
    ) -> Option<(String, Vec<Bind>)> {
        if self.assignments.is_empty() {
            return None;
        }
        let mut binds = self.binds;
        binds.push(Bind::Int(key));
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            self.table,
            self.assignments.join(", "),
            key_column,
            binds.len(),
            returning,
        );
        Some((sql, binds))
    }
}

/// Runs a finished partial update, reporting whether the key matched a
/// row. A missing row is a no-op, not an error.
pub async fn execute_returning_key(
    pool: &PgPool,
    sql: &str,
    binds: &[Bind],
) -> Result<Option<PgRow>, sqlx::Error> {
    let mut query = sqlx::query(sql);
    for bind in binds {
        query = match bind {
            Bind::Text(v) => query.bind(v.clone()),
            Bind::Int(v) => query.bind(*v),
            Bind::Decimal(v) => query.bind(*v),
        };
    }
    query.fetch_optional(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_and_blank_fields() {
        let mut u = PartialUpdate::new("customers");
        u.set_text("first_name", Some("Ann"))
            .set_text("middle_initial", Some(""))
            .set_text("last_name", None)
            .set_text("city", Some("  Ottawa  "));
        let (sql, binds) = u
            .into_statement("customer_id", 7, "customer_id")
            .expect("two fields were set");
        assert_eq!(
            sql,
            "UPDATE customers SET first_name = $1, city = $2 \
             WHERE customer_id = $3 RETURNING customer_id"
        );
        assert_eq!(
            binds,
            vec![
                Bind::Text("Ann".into()),
                Bind::Text("Ottawa".into()),
                Bind::Int(7)
            ]
        );
    }

    #[test]
    fn empty_update_yields_no_statement() {
        let mut u = PartialUpdate::new("employees");
        u.set_text("ssn", Some("")).set_text("zip", None);
        assert!(u.is_empty());
        assert!(u.into_statement("employee_id", 1, "employee_id").is_none());
    }

    #[test]
    fn key_placeholder_comes_last() {
        let mut u = PartialUpdate::new("chains");
        u.set_text("chain_name", Some("Hilton"));
        let (sql, binds) = u.into_statement("chain_id", 3, "chain_id").unwrap();
        assert_eq!(
            sql,
            "UPDATE chains SET chain_name = $1 WHERE chain_id = $2 RETURNING chain_id"
        );
        assert_eq!(binds.len(), 2);
    }
}
