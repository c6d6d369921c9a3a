//! Applies advanced list queries to SeaORM selects.
//!
//! Each repository declares the fields it exposes for filtering and sorting as a slice of
//! [`QueryField`]s mapping the wire name (camelCase) to a column and a value kind. Fields
//! outside that list are rejected with 400, so arbitrary columns can never be probed.

use sea_orm::{
    sea_query::LikeExpr,
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Value,
};

use crate::server::{
    error::AppError,
    model::query::{AdvancedQuery, FieldFilter, FilterOp},
    util::parse::{parse_bool, parse_datetime, parse_number},
};

/// How raw query values for a field are typed before reaching SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    Text,
    /// JSON array of strings; equality and `in` match any element.
    TextList,
    DateTime,
}

/// A filterable and sortable field of a resource.
#[derive(Debug, Clone, Copy)]
pub struct QueryField<C> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> QueryField<C> {
    pub const fn new(name: &'static str, column: C, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

fn lookup<'f, C>(fields: &'f [QueryField<C>], name: &str) -> Result<&'f QueryField<C>, AppError> {
    fields
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown query field '{}'", name)))
}

fn typed_value(kind: FieldKind, field: &str, raw: &str) -> Result<Value, AppError> {
    Ok(match kind {
        FieldKind::Integer => parse_number::<i64>(field, raw)?.into(),
        FieldKind::Float => parse_number::<f64>(field, raw)?.into(),
        FieldKind::Boolean => parse_bool(field, raw)?.into(),
        FieldKind::DateTime => parse_datetime(field, raw)?.into(),
        FieldKind::Text | FieldKind::TextList => raw.to_string().into(),
    })
}

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching one JSON-encoded element of a text list column.
fn list_element_pattern(value: &str) -> LikeExpr {
    let element = serde_json::Value::String(value.to_string()).to_string();
    let mut escaped = String::with_capacity(element.len());
    for c in element.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    LikeExpr::new(format!("%{}%", escaped)).escape(LIKE_ESCAPE)
}

/// Builds the `WHERE` condition for a set of filters.
///
/// # Returns
/// - `Ok(Condition)` - All filters combined with `AND`
/// - `Err(AppError::BadRequest)` - Unknown field, a value that does not fit the field's
///   kind, or a range operator on a list field
pub fn build_condition<C: ColumnTrait>(
    fields: &[QueryField<C>],
    filters: &[FieldFilter],
) -> Result<Condition, AppError> {
    let mut condition = Condition::all();

    for filter in filters {
        let field = lookup(fields, &filter.field)?;
        let column = field.column;

        if field.kind == FieldKind::TextList {
            let values = match filter.op {
                FilterOp::Eq => vec![filter.value.as_str()],
                FilterOp::In => filter.values(),
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Field '{}' only supports equality and 'in' filters",
                        field.name
                    )))
                }
            };
            let any = values.into_iter().fold(Condition::any(), |any, v| {
                any.add(column.like(list_element_pattern(v)))
            });
            condition = condition.add(any);
            continue;
        }

        let expr = match filter.op {
            FilterOp::Eq => column.eq(typed_value(field.kind, field.name, &filter.value)?),
            FilterOp::Gt => column.gt(typed_value(field.kind, field.name, &filter.value)?),
            FilterOp::Gte => column.gte(typed_value(field.kind, field.name, &filter.value)?),
            FilterOp::Lt => column.lt(typed_value(field.kind, field.name, &filter.value)?),
            FilterOp::Lte => column.lte(typed_value(field.kind, field.name, &filter.value)?),
            FilterOp::In => {
                let values = filter
                    .values()
                    .into_iter()
                    .map(|v| typed_value(field.kind, field.name, v))
                    .collect::<Result<Vec<_>, _>>()?;
                column.is_in(values)
            }
        };
        condition = condition.add(expr);
    }

    Ok(condition)
}

/// Applies the requested sort order, breaking ties on `tiebreak` so pages are stable.
pub fn apply_sort<E: EntityTrait>(
    mut select: Select<E>,
    fields: &[QueryField<E::Column>],
    query: &AdvancedQuery,
    tiebreak: E::Column,
) -> Result<Select<E>, AppError> {
    for key in &query.sort {
        let field = lookup(fields, &key.field)?;
        let order = if key.descending { Order::Desc } else { Order::Asc };
        select = select.order_by(field.column, order);
    }

    let tiebreak_order = match query.sort.first() {
        Some(key) if key.descending => Order::Desc,
        _ => Order::Asc,
    };

    Ok(select.order_by(tiebreak, tiebreak_order))
}

/// Runs an advanced query on top of `base`, returning the current page and the total
/// number of matching rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `base` - Select to start from, possibly already scoped
/// - `fields` - Whitelist of filterable/sortable fields
/// - `query` - Parsed advanced query
/// - `tiebreak` - Unique column appended to the sort order
///
/// # Returns
/// - `Ok((models, total))` - Models on the requested page and the filtered row count
/// - `Err(AppError::BadRequest)` - Invalid field or value in the query
/// - `Err(AppError::DbErr)` - Database error
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    base: Select<E>,
    fields: &[QueryField<E::Column>],
    query: &AdvancedQuery,
    tiebreak: E::Column,
) -> Result<(Vec<E::Model>, u64), AppError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let filtered = base.filter(build_condition(fields, &query.filters)?);
    let total = filtered.clone().count(db).await?;

    let models = apply_sort(filtered, fields, query, tiebreak)?
        .offset(query.offset())
        .limit(query.limit)
        .all(db)
        .await?;

    Ok((models, total))
}
