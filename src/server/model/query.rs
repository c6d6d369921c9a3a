//! Advanced query parameters for list endpoints.
//!
//! Translates raw query-string pairs into filters, a field projection, a sort order and a
//! page window. Supported filter syntax is `field=value` (equality) and `field[op]=value`
//! with `op` one of `gt`, `gte`, `lt`, `lte` or `in` (comma separated list). The keys
//! `select`, `sort`, `page` and `limit` are reserved.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    model::api::{AdvancedResultsDto, PageRefDto, PaginationDto},
    server::{error::AppError, util::parse::parse_number},
};

/// Upper bound for `limit` to keep single responses bounded.
pub const MAX_PAGE_LIMIT: u64 = 100;

const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FilterOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "gt" => Some(FilterOp::Gt),
            "gte" => Some(FilterOp::Gte),
            "lt" => Some(FilterOp::Lt),
            "lte" => Some(FilterOp::Lte),
            "in" => Some(FilterOp::In),
            _ => None,
        }
    }
}

/// A single `field[op]=value` condition, value still in its raw string form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FieldFilter {
    /// Values of an `in` filter, split on commas with blanks dropped.
    pub fn values(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

/// Default page and page size applied when the request omits them.
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedQuery {
    pub filters: Vec<FieldFilter>,
    /// Fields to keep in each record; `None` keeps all.
    pub select: Option<Vec<String>>,
    pub sort: Vec<SortKey>,
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
}

impl AdvancedQuery {
    /// Parses query-string pairs into an advanced query.
    ///
    /// # Arguments
    /// - `pairs` - Decoded query-string key/value pairs in request order
    /// - `defaults` - Page and limit used when the request does not provide them
    ///
    /// # Returns
    /// - `Ok(AdvancedQuery)` - Parsed query, sorted by `-createdAt` when no sort is given
    /// - `Err(AppError::BadRequest)` - Unknown operator, non-numeric page/limit, or a page
    ///   too large to address
    pub fn parse(pairs: &[(String, String)], defaults: PageDefaults) -> Result<Self, AppError> {
        let mut filters = Vec::new();
        let mut select = None;
        let mut sort = Vec::new();
        let mut page = defaults.page;
        let mut limit = defaults.limit;

        for (key, value) in pairs {
            match key.as_str() {
                "select" => select = Some(split_list(value)),
                "sort" => {
                    sort = split_list(value)
                        .into_iter()
                        .map(|field| match field.strip_prefix('-') {
                            Some(field) => SortKey {
                                field: field.to_string(),
                                descending: true,
                            },
                            None => SortKey {
                                field: field.trim_start_matches('+').to_string(),
                                descending: false,
                            },
                        })
                        .collect()
                }
                "page" => page = parse_number("page", value)?,
                "limit" => limit = parse_number("limit", value)?,
                _ => filters.push(parse_filter(key, value)?),
            }
        }

        if sort.is_empty() {
            sort.push(SortKey {
                field: "createdAt".to_string(),
                descending: true,
            });
        }

        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        // page * limit feeds the SQL offset, which must fit an i64.
        if page > i64::MAX as u64 / limit {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range",
                page
            )));
        }

        Ok(Self {
            filters,
            select,
            sort,
            page,
            limit,
        })
    }

    /// Number of records to skip for the current page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Keeps only the selected fields of a serialized record, plus `id`.
    ///
    /// Records are returned unchanged when no `select` was given or when they are not
    /// JSON objects.
    pub fn project(&self, record: Value) -> Value {
        let (Some(select), Value::Object(fields)) = (&self.select, &record) else {
            return record;
        };

        let projected: Map<String, Value> = fields
            .iter()
            .filter(|(key, _)| key.as_str() == "id" || select.iter().any(|s| s == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Value::Object(projected)
    }

    /// Links to the neighbouring pages given the total number of matching records.
    pub fn pagination(&self, total: u64) -> Pagination {
        let end = self.page * self.limit;

        Pagination {
            next: (end < total).then_some(PageRef {
                page: self.page + 1,
                limit: self.limit,
            }),
            prev: (self.page > 1).then_some(PageRef {
                page: self.page - 1,
                limit: self.limit,
            }),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_filter(key: &str, value: &str) -> Result<FieldFilter, AppError> {
    debug_assert!(!RESERVED_KEYS.contains(&key));

    let (field, op) = match key.split_once('[') {
        Some((field, rest)) => {
            let op = rest
                .strip_suffix(']')
                .and_then(FilterOp::parse)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid filter operator in '{}'", key)))?;
            (field, op)
        }
        None => (key, FilterOp::Eq),
    };

    Ok(FieldFilter {
        field: field.to_string(),
        op,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub next: Option<PageRef>,
    pub prev: Option<PageRef>,
}

impl Pagination {
    pub fn into_dto(self) -> PaginationDto {
        let to_dto = |r: PageRef| PageRefDto {
            page: r.page,
            limit: r.limit,
        };
        PaginationDto {
            next: self.next.map(to_dto),
            prev: self.prev.map(to_dto),
        }
    }
}

/// One page of records matching an advanced query.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedResults<T> {
    pub items: Vec<T>,
    /// Total number of matching records across all pages.
    pub total: u64,
    pub pagination: Pagination,
}

impl<T> AdvancedResults<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> AdvancedResults<U> {
        AdvancedResults {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pagination: self.pagination,
        }
    }
}

impl<T: Serialize> AdvancedResults<T> {
    /// Serializes the page into the list envelope, applying the query's field selection.
    pub fn into_dto(self, query: &AdvancedQuery) -> Result<AdvancedResultsDto, AppError> {
        let data = self
            .items
            .iter()
            .map(|item| serde_json::to_value(item).map(|v| query.project(v)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AdvancedResultsDto {
            success: true,
            count: data.len(),
            total: self.total,
            pagination: self.pagination.into_dto(),
            data,
        })
    }
}
