// liftlex - LIFT lexicon extraction toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shaping requested fields into one flat table.
//!
//! The builder walks every level between the shallowest and the deepest
//! requested level, evaluates each field on the nodes of its own level, and
//! joins the per-level rows along parent linkage:
//!
//! - **repeat** (default): a left outer join. Ancestor values are repeated
//!   once per descendant row; an ancestor without descendants still appears
//!   once, with empty descendant columns.
//! - **aggregate**: one row per node of the shallowest level. Each deeper
//!   column holds the values of the matching descendant nodes joined with
//!   the aggregate separator, one item per descendant; several values on
//!   one descendant are first joined with the value separator.
//!
//! Language variants fan out into columns. Fields of kind
//! [`Multiplicity::Multiple`] fan out into rows (repeat mode) or are joined
//! (aggregate mode).

use crate::catalog::{self, FieldDefinition, Multiplicity};
use crate::document::LiftDocument;
use crate::error::{LiftError, Result};
use crate::level::Level;
use crate::path::{Ambiguity, FieldPath};
use crate::table::{ColumnKey, NodeRef, ResultTable, Row, Warning};
use crate::walker::{walk, LevelNode};
use roxmltree::NodeId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Join policy and separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Aggregate descendants into one row per shallowest node (default: false).
    pub aggregate: bool,
    /// Separator between aggregated values (default: `;`).
    pub aggregate_separator: String,
    /// Separator between several same-language values of one
    /// `MULTIPLE_WITH_*_LANG` field on a single node (default: `/`).
    pub value_separator: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            aggregate: false,
            aggregate_separator: ";".to_string(),
            value_separator: "/".to_string(),
        }
    }
}

impl BuildOptions {
    /// Repeat mode with default separators.
    pub fn repeat() -> Self {
        Self::default()
    }

    /// Aggregate mode with the given separator.
    pub fn aggregate(separator: impl Into<String>) -> Self {
        Self {
            aggregate: true,
            aggregate_separator: separator.into(),
            ..Self::default()
        }
    }
}

/// A validated table request: resolved fields and the chain of levels to
/// walk.
///
/// # Examples
///
/// ```
/// use liftlex_core::{BuildOptions, LiftDocument, TableBuilder};
///
/// let doc = LiftDocument::parse(r#"<lift>
///   <entry id="1">
///     <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
///     <sense><gloss lang="en"><text>road</text></gloss></sense>
///     <sense><gloss lang="en"><text>skin</text></gloss></sense>
///   </entry>
/// </lift>"#).unwrap();
///
/// let builder = TableBuilder::new(&["form", "gloss"], BuildOptions::repeat()).unwrap();
/// let table = builder.build(&doc);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(1, "form", "tww"), Some("efe"));
/// assert_eq!(table.get(1, "gloss", "en"), Some("skin"));
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    fields: Vec<FieldPath>,
    chain: Vec<Level>,
    options: BuildOptions,
}

impl TableBuilder {
    /// Resolve and check a list of field names.
    ///
    /// Repeated names collapse to their first occurrence.
    ///
    /// # Errors
    ///
    /// - [`LiftError::EmptyFieldList`] when `names` is empty
    /// - [`LiftError::UnknownField`] for a name missing from the catalog
    /// - [`LiftError::IncompatibleLevels`] when two fields sit on sibling
    ///   levels (sense or example together with variant)
    pub fn new<S: AsRef<str>>(names: &[S], options: BuildOptions) -> Result<Self> {
        if names.is_empty() {
            return Err(LiftError::EmptyFieldList);
        }

        let mut defs: Vec<&'static FieldDefinition> = Vec::with_capacity(names.len());
        for name in names {
            let def = catalog::resolve(name.as_ref())?;
            if defs.iter().any(|d| d.name == def.name) {
                debug!(field = def.name, "duplicate field request ignored");
                continue;
            }
            defs.push(def);
        }

        for (i, a) in defs.iter().enumerate() {
            for b in &defs[i + 1..] {
                if !a.level.contains(b.level) && !b.level.contains(a.level) {
                    return Err(LiftError::IncompatibleLevels {
                        first: a.level,
                        first_field: a.name.to_string(),
                        second: b.level,
                        second_field: b.name.to_string(),
                    });
                }
            }
        }

        // All levels now lie on one lineage.
        let deepest = defs.iter().map(|d| d.level).max_by_key(|l| l.depth());
        let shallowest = defs.iter().map(|d| d.level).min_by_key(|l| l.depth());
        let chain = match (deepest, shallowest) {
            (Some(deep), Some(shallow)) => deep
                .lineage()
                .into_iter()
                .skip_while(|l| *l != shallow)
                .collect(),
            _ => return Err(LiftError::EmptyFieldList),
        };

        let fields = defs
            .into_iter()
            .map(FieldPath::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fields,
            chain,
            options,
        })
    }

    /// The resolved fields, in requested order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDefinition> + '_ {
        self.fields.iter().map(|f| f.def)
    }

    /// Levels walked, shallowest first.
    pub fn levels(&self) -> &[Level] {
        &self.chain
    }

    /// The join options.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the table for `doc`.
    pub fn build(&self, doc: &LiftDocument<'_>) -> ResultTable {
        let extraction = Extraction::run(self, doc);
        let rows = if self.options.aggregate {
            extraction.aggregate_rows(&self.options)
        } else {
            extraction.repeat_rows()
        };
        debug!(
            rows = rows.len(),
            columns = extraction.columns.len(),
            aggregate = self.options.aggregate,
            "table built"
        );
        ResultTable::new(extraction.columns, rows, extraction.warnings)
    }
}

/// Resolve `names` and build the table in one call.
pub fn build_table<S: AsRef<str>>(
    doc: &LiftDocument<'_>,
    names: &[S],
    options: BuildOptions,
) -> Result<ResultTable> {
    Ok(TableBuilder::new(names, options)?.build(doc))
}

/// Values of one field on one node.
enum Extracted {
    /// `(subfield, value)` pairs; subfield is empty for unique fields.
    Keyed(Vec<(String, String)>),
    /// Unkeyed repeated values, fanned out into rows.
    Repeated(Vec<String>),
}

struct LevelData<'a, 'input> {
    nodes: Vec<LevelNode<'a, 'input>>,
    /// Indices into the builder's fields for the fields of this level.
    fields: Vec<usize>,
    /// `[node][slot]`, slots parallel to `fields`.
    extracted: Vec<Vec<Extracted>>,
    /// Parent element -> indices of its nodes on this level.
    by_parent: HashMap<NodeId, Vec<usize>>,
}

/// Sparse cells: `(column, value)`.
type Cells = Vec<(usize, String)>;

struct Extraction<'a, 'input> {
    levels: Vec<LevelData<'a, 'input>>,
    columns: Vec<ColumnKey>,
    column_of: HashMap<(usize, String), usize>,
    warnings: Vec<Warning>,
}

impl<'a, 'input: 'a> Extraction<'a, 'input> {
    fn run(builder: &TableBuilder, doc: &'a LiftDocument<'input>) -> Self {
        let mut subfields: Vec<Vec<String>> = builder
            .fields
            .iter()
            .map(|f| {
                if f.def.multiplicity.is_lang_keyed() {
                    Vec::new()
                } else {
                    vec![String::new()]
                }
            })
            .collect();
        let mut warnings = Vec::new();
        let mut levels = Vec::with_capacity(builder.chain.len());

        for &level in &builder.chain {
            let fields: Vec<usize> = builder
                .fields
                .iter()
                .enumerate()
                .filter(|(_, f)| f.def.level == level)
                .map(|(i, _)| i)
                .collect();

            let nodes: Vec<LevelNode<'a, 'input>> = walk(doc, level).collect();
            let mut extracted = Vec::with_capacity(nodes.len());
            let mut by_parent: HashMap<NodeId, Vec<usize>> = HashMap::new();

            for (index, node) in nodes.iter().enumerate() {
                if let Some(parent) = node.parent {
                    by_parent.entry(parent.id()).or_default().push(index);
                }
                let mut slots = Vec::with_capacity(fields.len());
                for &field_index in &fields {
                    let field = &builder.fields[field_index];
                    let values = extract(field, node, &builder.options.value_separator, &mut warnings);
                    if let Extracted::Keyed(pairs) = &values {
                        for (sub, _) in pairs {
                            if !subfields[field_index].contains(sub) {
                                subfields[field_index].push(sub.clone());
                            }
                        }
                    }
                    slots.push(values);
                }
                extracted.push(slots);
            }

            debug!(level = %level, nodes = nodes.len(), fields = fields.len(), "level walked");
            levels.push(LevelData {
                nodes,
                fields,
                extracted,
                by_parent,
            });
        }

        let mut columns = Vec::new();
        let mut column_of = HashMap::new();
        for (field_index, (field, subs)) in builder.fields.iter().zip(subfields).enumerate() {
            // A language-keyed field absent from the whole document still
            // gets one (empty) column.
            let subs = if subs.is_empty() { vec![String::new()] } else { subs };
            for sub in subs {
                column_of.insert((field_index, sub.clone()), columns.len());
                columns.push(ColumnKey::new(field.def.name, sub));
            }
        }

        Self {
            levels,
            columns,
            column_of,
            warnings,
        }
    }

    fn node_ref(&self, depth: usize, node: usize) -> NodeRef {
        let n = &self.levels[depth].nodes[node];
        NodeRef {
            level: n.level,
            id: n.id.clone(),
        }
    }

    fn children(&self, depth: usize, node: usize) -> &[usize] {
        let Some(child_level) = self.levels.get(depth + 1) else {
            return &[];
        };
        let parent = self.levels[depth].nodes[node].node.id();
        child_level
            .by_parent
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The node's cells as a single row, repeated values joined with `sep`.
    fn collapsed(&self, depth: usize, node: usize, sep: &str) -> Cells {
        let level = &self.levels[depth];
        let mut cells = Vec::new();
        for (slot, &field_index) in level.fields.iter().enumerate() {
            match &level.extracted[node][slot] {
                Extracted::Keyed(pairs) => {
                    for (sub, value) in pairs {
                        cells.push((self.column_of[&(field_index, sub.clone())], value.clone()));
                    }
                }
                Extracted::Repeated(values) => {
                    cells.push((self.column_of[&(field_index, String::new())], values.join(sep)));
                }
            }
        }
        cells
    }

    /// The node's local sub-rows: one per repeated value (zipped across
    /// repeated fields), at least one.
    fn expanded(&self, depth: usize, node: usize) -> Vec<Cells> {
        let level = &self.levels[depth];
        let mut base = Vec::new();
        let mut repeated: Vec<(usize, &Vec<String>)> = Vec::new();
        for (slot, &field_index) in level.fields.iter().enumerate() {
            match &level.extracted[node][slot] {
                Extracted::Keyed(pairs) => {
                    for (sub, value) in pairs {
                        base.push((self.column_of[&(field_index, sub.clone())], value.clone()));
                    }
                }
                Extracted::Repeated(values) => {
                    repeated.push((self.column_of[&(field_index, String::new())], values));
                }
            }
        }

        let fan_out = repeated.iter().map(|(_, v)| v.len()).max().unwrap_or(0).max(1);
        (0..fan_out)
            .map(|i| {
                let mut cells = base.clone();
                for (col, values) in &repeated {
                    cells.push((*col, values.get(i).cloned().unwrap_or_default()));
                }
                cells
            })
            .collect()
    }

    fn rows_under(&self, depth: usize, node: usize) -> Vec<(Vec<NodeRef>, Cells)> {
        let mut below: Vec<(Vec<NodeRef>, Cells)> = self
            .children(depth, node)
            .iter()
            .flat_map(|&child| self.rows_under(depth + 1, child))
            .collect();
        if below.is_empty() {
            below.push((Vec::new(), Vec::new()));
        }

        let me = self.node_ref(depth, node);
        let mut rows = Vec::new();
        for local in self.expanded(depth, node) {
            for (lineage, cells) in &below {
                let mut full_lineage = Vec::with_capacity(lineage.len() + 1);
                full_lineage.push(me.clone());
                full_lineage.extend(lineage.iter().cloned());
                let mut full_cells = local.clone();
                full_cells.extend(cells.iter().cloned());
                rows.push((full_lineage, full_cells));
            }
        }
        rows
    }

    fn dense(&self, lineage: Vec<NodeRef>, sparse: Cells) -> Row {
        let mut cells = vec![String::new(); self.columns.len()];
        for (col, value) in sparse {
            cells[col] = value;
        }
        Row { lineage, cells }
    }

    fn repeat_rows(&self) -> Vec<Row> {
        let Some(root) = self.levels.first() else {
            return Vec::new();
        };
        (0..root.nodes.len())
            .flat_map(|node| self.rows_under(0, node))
            .map(|(lineage, cells)| self.dense(lineage, cells))
            .collect()
    }

    fn aggregate_rows(&self, options: &BuildOptions) -> Vec<Row> {
        let Some(root) = self.levels.first() else {
            return Vec::new();
        };
        (0..root.nodes.len())
            .map(|node| {
                let mut cells = self.collapsed(0, node, &options.aggregate_separator);
                let mut frontier = vec![node];
                for depth in 1..self.levels.len() {
                    frontier = frontier
                        .iter()
                        .flat_map(|&n| self.children(depth - 1, n).iter().copied())
                        .collect();
                    cells.extend(self.aggregate_level(depth, &frontier, options));
                }
                self.dense(vec![self.node_ref(0, node)], cells)
            })
            .collect()
    }

    /// Join, per column of this level, the collapsed values of `nodes`.
    ///
    /// Repeated values of one node are joined with the value separator, so
    /// each column holds exactly one item per descendant node.
    fn aggregate_level(&self, depth: usize, nodes: &[usize], options: &BuildOptions) -> Cells {
        let level = &self.levels[depth];
        let own_columns: Vec<usize> = self
            .column_of
            .iter()
            .filter(|((field_index, _), _)| level.fields.contains(field_index))
            .map(|(_, &col)| col)
            .collect();
        if own_columns.is_empty() || nodes.is_empty() {
            return Vec::new();
        }

        let per_node: Vec<Cells> = nodes
            .iter()
            .map(|&n| self.collapsed(depth, n, &options.value_separator))
            .collect();
        own_columns
            .into_iter()
            .map(|col| {
                let joined = per_node
                    .iter()
                    .map(|cells| {
                        cells
                            .iter()
                            .find(|(c, _)| *c == col)
                            .map(|(_, v)| v.as_str())
                            .unwrap_or("")
                    })
                    .collect::<Vec<_>>()
                    .join(&options.aggregate_separator);
                (col, joined)
            })
            .collect()
    }
}

fn extract(
    field: &FieldPath,
    node: &LevelNode<'_, '_>,
    value_separator: &str,
    warnings: &mut Vec<Warning>,
) -> Extracted {
    let mut ambiguities: Vec<Ambiguity> = Vec::new();
    let matches = field.evaluate(node.node, &mut ambiguities);

    for ambiguity in ambiguities {
        let warning = Warning::AmbiguousUniqueField {
            field: field.def.name.to_string(),
            node_id: node.id.clone(),
            language: ambiguity.language,
            count: ambiguity.count,
            line: ambiguity.line,
        };
        warn!("{}", warning);
        warnings.push(warning);
    }

    match field.def.multiplicity {
        Multiplicity::Multiple => {
            Extracted::Repeated(matches.iter().map(|m| field.value_of(m.node)).collect())
        }
        Multiplicity::MultipleWithObjectLang | Multiplicity::MultipleWithMetaLang => {
            let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
            for m in &matches {
                let lang = m.lang.unwrap_or("");
                let value = field.value_of(m.node);
                match grouped.iter_mut().find(|(l, _)| l == lang) {
                    Some((_, values)) => values.push(value),
                    None => grouped.push((lang.to_string(), vec![value])),
                }
            }
            Extracted::Keyed(
                grouped
                    .into_iter()
                    .map(|(lang, values)| (lang, values.join(value_separator)))
                    .collect(),
            )
        }
        Multiplicity::Unique | Multiplicity::UniqueByObjectLang | Multiplicity::UniqueByMetaLang => {
            Extracted::Keyed(
                matches
                    .iter()
                    .map(|m| (m.lang.unwrap_or("").to_string(), field.value_of(m.node)))
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = r#"<lift version="0.13">
<entry id="1">
  <lexical-unit><form lang="tww"><text>efe</text></form></lexical-unit>
  <relation type="synonym" ref="2"/>
  <relation type="compare" ref="3"/>
  <sense>
    <grammatical-info value="Noun"/>
    <gloss lang="en"><text>road</text></gloss>
    <gloss lang="en"><text>path</text></gloss>
    <trait name="semantic-domain-ddp4" value="1.1"/>
    <trait name="semantic-domain-ddp4" value="1.2"/>
    <example><form lang="tww"><text>efe ne</text></form></example>
    <example><form lang="tww"><text>efe na</text></form></example>
  </sense>
  <sense><gloss lang="fr"><text>peau</text></gloss></sense>
  <variant><form lang="tww"><text>efee</text></form></variant>
</entry>
<entry id="2">
  <lexical-unit><form lang="tww"><text>hei</text></form></lexical-unit>
</entry>
</lift>"#;

    fn table(fields: &[&str], options: BuildOptions) -> ResultTable {
        let doc = LiftDocument::parse(LEXICON).unwrap();
        build_table(&doc, fields, options).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_unknown() {
        let none: [&str; 0] = [];
        assert_eq!(
            TableBuilder::new(&none, BuildOptions::default()).err(),
            Some(LiftError::EmptyFieldList)
        );
        assert!(matches!(
            TableBuilder::new(&["form", "nosuchfield"], BuildOptions::default()),
            Err(LiftError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_rejects_sibling_levels() {
        for fields in [["gloss", "variantform"], ["example", "variantype"]] {
            assert!(matches!(
                TableBuilder::new(&fields, BuildOptions::default()),
                Err(LiftError::IncompatibleLevels { .. })
            ));
        }
    }

    #[test]
    fn test_chain_includes_intermediate_levels() {
        let builder = TableBuilder::new(&["example", "ID"], BuildOptions::default()).unwrap();
        assert_eq!(builder.levels(), &[Level::Entry, Level::Sense, Level::Example]);
        let builder = TableBuilder::new(&["gloss"], BuildOptions::default()).unwrap();
        assert_eq!(builder.levels(), &[Level::Sense]);
    }

    #[test]
    fn test_duplicate_fields_collapse() {
        let builder = TableBuilder::new(&["form", "form", "ID"], BuildOptions::default()).unwrap();
        let names: Vec<_> = builder.fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["form", "ID"]);
    }

    #[test]
    fn test_same_language_values_join_with_value_separator() {
        let t = table(&["gloss"], BuildOptions::default());
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0, "gloss", "en"), Some("road/path"));
        assert_eq!(t.get(1, "gloss", "en"), Some(""));
        assert_eq!(t.get(1, "gloss", "fr"), Some("peau"));
    }

    #[test]
    fn test_columns_follow_request_then_first_seen_order() {
        let t = table(&["gloss", "ID"], BuildOptions::default());
        let headers: Vec<_> = t.columns().iter().map(|c| c.to_string()).collect();
        assert_eq!(headers, vec!["gloss/en", "gloss/fr", "ID"]);
    }

    #[test]
    fn test_repeat_mode_left_outer_join() {
        let t = table(&["ID", "category"], BuildOptions::default());
        // entry 1 has two senses, entry 2 none
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(0, "category", ""), Some("Noun"));
        assert_eq!(t.get(1, "ID", ""), Some("1"));
        assert_eq!(t.get(2, "ID", ""), Some("2"));
        assert_eq!(t.get(2, "category", ""), Some(""));
        assert_eq!(t.rows()[2].lineage.len(), 1);
        assert_eq!(t.rows()[0].leaf().unwrap().id, "1.1");
    }

    #[test]
    fn test_multiple_field_fans_out_rows() {
        let t = table(&["ID", "relation"], BuildOptions::default());
        let relations: Vec<_> = t.column_values(1).collect();
        assert_eq!(relations, vec!["2", "3", ""]);
    }

    #[test]
    fn test_multiple_fields_zip_on_one_node() {
        let t = table(&["semanticdomain", "category"], BuildOptions::default());
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(0, "semanticdomain", ""), Some("1.1"));
        assert_eq!(t.get(1, "semanticdomain", ""), Some("1.2"));
        assert_eq!(t.get(1, "category", ""), Some("Noun"));
        assert_eq!(t.get(2, "semanticdomain", ""), Some(""));
    }

    #[test]
    fn test_three_level_repeat() {
        let t = table(&["ID", "example"], BuildOptions::default());
        let examples: Vec<_> = t.column_values(1).collect();
        // sense 1.1 has two examples, sense 1.2 none, entry 2 no senses
        assert_eq!(examples, vec!["efe ne", "efe na", "", ""]);
        assert_eq!(t.rows()[1].lineage.len(), 3);
        assert_eq!(t.rows()[2].lineage.len(), 2);
        assert_eq!(t.rows()[3].lineage.len(), 1);
    }

    #[test]
    fn test_aggregate_one_row_per_root() {
        let t = table(&["ID", "gloss", "relation"], BuildOptions::aggregate("|"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0, "relation", ""), Some("2|3"));
        assert_eq!(t.get(0, "gloss", "en"), Some("road/path|"));
        assert_eq!(t.get(0, "gloss", "fr"), Some("|peau"));
        assert_eq!(t.get(1, "gloss", "en"), Some(""));
        assert_eq!(t.rows()[1].lineage.len(), 1);
    }

    #[test]
    fn test_aggregate_skips_over_intermediate_level() {
        let t = table(&["ID", "example"], BuildOptions::aggregate(";"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0, "example", "tww"), Some("efe ne;efe na"));
        assert_eq!(t.get(1, "example", "tww"), Some(""));
    }

    #[test]
    fn test_aggregate_keeps_one_item_per_descendant() {
        let t = table(&["form", "semanticdomain", "gloss"], BuildOptions::aggregate(";"));
        // two senses: the first with two domains, the second with none
        assert_eq!(t.get(0, "semanticdomain", ""), Some("1.1/1.2;"));
        assert_eq!(t.get(0, "gloss", "fr"), Some(";peau"));
        assert_eq!(t.get(1, "semanticdomain", ""), Some(""));
    }

    #[test]
    fn test_absent_lang_field_keeps_one_column() {
        let t = table(&["ID", "note"], BuildOptions::default());
        assert_eq!(t.columns()[1], ColumnKey::new("note", ""));
        assert!(t.column_values(1).all(str::is_empty));
    }

    #[test]
    fn test_variant_table() {
        let t = table(&["form", "variantform"], BuildOptions::default());
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0, "variantform", "tww"), Some("efee"));
        assert_eq!(t.get(1, "form", "tww"), Some("hei"));
    }

    #[test]
    fn test_ambiguous_unique_field_is_a_warning() {
        let doc = LiftDocument::parse(
            r#"<lift><entry id="x"><sense><grammatical-info value="Noun"/><grammatical-info value="Verb"/></sense></entry></lift>"#,
        )
        .unwrap();
        let t = build_table(&doc, &["category"], BuildOptions::default()).unwrap();
        assert_eq!(t.get(0, "category", ""), Some("Noun"));
        assert_eq!(t.warnings().len(), 1);
        let Warning::AmbiguousUniqueField { node_id, count, .. } = &t.warnings()[0];
        assert_eq!(node_id, "x.1");
        assert_eq!(*count, 2);
    }
}
