//! Inlines fragment spreads into the query roots of an upsert block.

use crate::ast::FragmentDefinition;
use crate::ast::QueryResult;
use crate::ast::Selection;
use crate::DqlParseError;
use crate::DqlParseErrorKind;
use indexmap::IndexMap;
use log::trace;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragment definitions of one upsert block, keyed by name, in definition
/// order.
pub type FragmentTable = IndexMap<String, FragmentDefinition>;

/// Replaces every fragment spread in `result` with the selections of the
/// fragment it names.
///
/// Spreads inside fragment bodies are expanded as well, at any depth. A
/// fragment may be spread before it is defined. Spreading an unknown
/// fragment fails with `UndefinedFragment`; a fragment that reaches itself
/// through spreads fails with `FragmentCycle`. Fragments that are never
/// spread are not checked.
pub fn resolve_fragments(
    result: &mut QueryResult,
    fragments: &FragmentTable,
) -> Result<(), DqlParseError> {
    let mut resolver = FragmentResolver {
        fragments,
        expanded: HashMap::new(),
        path: Vec::new(),
        visiting: HashSet::new(),
    };
    for root in &mut result.roots {
        resolver.expand_selections(&mut root.selections)?;
    }
    Ok(())
}

struct FragmentResolver<'a> {
    fragments: &'a FragmentTable,
    /// Fully expanded selections of each fragment seen so far.
    expanded: HashMap<&'a str, Vec<Selection>>,
    /// Fragments currently being expanded, outermost first.
    path: Vec<String>,
    visiting: HashSet<String>,
}

impl<'a> FragmentResolver<'a> {
    fn expand_selections(&mut self, selections: &mut Vec<Selection>) -> Result<(), DqlParseError> {
        if !selections.iter().any(needs_expansion) {
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(selections.len());
        for selection in selections.drain(..) {
            match selection {
                Selection::Field(mut node) => {
                    self.expand_selections(&mut node.selections)?;
                    resolved.push(Selection::Field(node));
                },
                Selection::FragmentSpread(spread) => {
                    let Some((name, fragment)) = self.fragments.get_key_value(&spread.name) else {
                        let mut error = DqlParseError::new(
                            format!("missing fragment `{}`", spread.name),
                            spread.span,
                            DqlParseErrorKind::UndefinedFragment {
                                name: spread.name.clone(),
                            },
                        );
                        error.add_help(format!(
                            "Define it in the upsert block with `fragment {} {{ ... }}`",
                            spread.name,
                        ));
                        return Err(error);
                    };

                    if self.visiting.contains(name) {
                        let start = self
                            .path
                            .iter()
                            .position(|entry| entry == name)
                            .unwrap_or(0);
                        let mut cycle_path = self.path[start..].to_vec();
                        cycle_path.push(name.clone());
                        return Err(DqlParseError::new(
                            format!("cycle detected in fragment spreads: {}", cycle_path.join(" -> ")),
                            spread.span,
                            DqlParseErrorKind::FragmentCycle { cycle_path },
                        ));
                    }

                    if let Some(inlined) = self.expanded.get(name.as_str()) {
                        resolved.extend(inlined.iter().cloned());
                        continue;
                    }

                    trace!("expanding fragment `{name}`");
                    self.path.push(name.clone());
                    self.visiting.insert(name.clone());
                    let mut inlined = fragment.selections.clone();
                    self.expand_selections(&mut inlined)?;
                    self.visiting.remove(name);
                    self.path.pop();

                    resolved.extend(inlined.iter().cloned());
                    self.expanded.insert(name.as_str(), inlined);
                },
            }
        }
        *selections = resolved;
        Ok(())
    }
}

/// Returns `true` if `selection` is a spread or contains one.
fn needs_expansion(selection: &Selection) -> bool {
    match selection {
        Selection::FragmentSpread(_) => true,
        Selection::Field(node) => node.selections.iter().any(needs_expansion),
    }
}
