//! Helpers for the list queries every Postgres repository runs.

use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, PgPool, Postgres, QueryBuilder, Type};
use uuid::Uuid;

use crate::shared::types::ListQuery;

/// Append `is_active` and ILIKE search filters.
///
/// The builder must already end in a `WHERE` clause (e.g. `WHERE 1=1`).
pub fn push_list_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    query: &ListQuery,
    search_columns: &[&str],
) {
    if let Some(is_active) = query.is_active {
        builder.push(" AND is_active = ").push_bind(is_active);
    }

    if let Some(term) = query.search_term() {
        if search_columns.is_empty() {
            return;
        }
        let pattern = format!("%{}%", escape_like(term));
        builder.push(" AND (");
        let mut separated = builder.separated(" OR ");
        for column in search_columns {
            separated.push(format!("{} ILIKE ", column));
            separated.push_bind_unseparated(pattern.clone());
            separated.push_unseparated(" ESCAPE '\\'");
        }
        separated.push_unseparated(")");
    }
}

/// Make `%`, `_` and `\` in user input match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Append `ORDER BY ... LIMIT ... OFFSET ...`
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, order_by: &str, query: &ListQuery) {
    builder
        .push(format!(" ORDER BY {}", order_by))
        .push(" LIMIT ")
        .push_bind(query.limit())
        .push(" OFFSET ")
        .push_bind(query.offset());
}

/// Restrict a list to the children of one parent, e.g. `("category_id", id)`
pub type Scope<'a> = Option<(&'a str, Uuid)>;

fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, scope: Scope<'_>) {
    if let Some((column, id)) = scope {
        builder.push(format!(" AND {} = ", column)).push_bind(id);
    }
}

/// Run the count and page queries for a list endpoint.
///
/// Returns the requested page together with the total number of matching rows.
pub async fn fetch_page<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    scope: Scope<'_>,
    search_columns: &[&str],
    order_by: &str,
    query: &ListQuery,
) -> Result<(Vec<T>, i64), sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {} WHERE 1=1", table));
    push_scope(&mut count, scope);
    push_list_filters(&mut count, query, search_columns);
    let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

    let mut select =
        QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {} WHERE 1=1", columns, table));
    push_scope(&mut select, scope);
    push_list_filters(&mut select, query, search_columns);
    push_page(&mut select, order_by, query);
    let rows = select.build_query_as::<T>().fetch_all(pool).await?;

    Ok((rows, total))
}

/// `SELECT EXISTS(...)` query used for uniqueness pre-checks.
///
/// ```ignore
/// let taken = ExistsQuery::new("sub_categories")
///     .eq("category_id", category_id)
///     .eq("order_number", 3)
///     .excluding(Some(id))
///     .fetch(&pool)
///     .await?;
/// ```
pub struct ExistsQuery<'q> {
    builder: QueryBuilder<'q, Postgres>,
}

impl<'q> ExistsQuery<'q> {
    pub fn new(table: &str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("SELECT EXISTS(SELECT 1 FROM {} WHERE TRUE", table)),
        }
    }

    /// `column` may be an expression such as `LOWER(email)`
    pub fn eq<T>(mut self, column: &str, value: T) -> Self
    where
        T: 'q + Encode<'q, Postgres> + Type<Postgres>,
    {
        self.builder
            .push(format!(" AND {} = ", column))
            .push_bind(value);
        self
    }

    /// Ignore the row being updated
    pub fn excluding(mut self, id: Option<Uuid>) -> Self {
        if let Some(id) = id {
            self.builder.push(" AND id <> ").push_bind(id);
        }
        self
    }

    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    pub async fn fetch(mut self, pool: &PgPool) -> Result<bool, sqlx::Error> {
        self.builder.push(")");
        self.builder
            .build_query_scalar::<bool>()
            .fetch_one(pool)
            .await
    }
}
