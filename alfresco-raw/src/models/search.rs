use serde::{Deserialize, Serialize};

use super::node::Node;
use super::paging::Pagination;
use super::AdditionalProperties;
use crate::types::Maybe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguage {
    #[default]
    Afts,
    Lucene,
    Cmis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    pub query: String,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub language: Maybe<QueryLanguage>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPagination {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub max_items: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub skip_count: Maybe<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortType {
    #[default]
    Field,
    Document,
    Score,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSortDefinition {
    #[serde(default, rename = "type", skip_serializing_if = "Maybe::is_unset")]
    pub sort_type: Maybe<SortType>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub field: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub ascending: Maybe<bool>,
}

/// Body of `POST /search`. Facets, highlighting and spellcheck are not
/// modelled; pass them through `additional_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: RequestQuery,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub paging: Maybe<RequestPagination>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub include: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub sort: Maybe<Vec<RequestSortDefinition>>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub score: Maybe<f64>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultNode {
    #[serde(flatten)]
    pub node: Node,
    #[serde(default, skip_serializing_if = "Maybe::is_unset")]
    pub search: Maybe<SearchEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSetRowEntry {
    pub entry: ResultNode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSetPagingList {
    pub pagination: Pagination,
    #[serde(default)]
    pub entries: Vec<ResultSetRowEntry>,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSetPaging {
    pub list: ResultSetPagingList,
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
