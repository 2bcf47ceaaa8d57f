//! Result-level checks run once an upsert block's query roots are
//! assembled and their fragments resolved.

use crate::ast::Argument;
use crate::ast::QueryNode;
use crate::ast::QueryResult;
use crate::ast::Value;
use crate::DqlParseError;
use crate::DqlParseErrorKind;
use crate::DqlSourceSpan;
use indexmap::IndexMap;

/// Functions whose positional name arguments refer to query variables.
const VARIABLE_FUNCTIONS: [&str; 3] = ["uid", "val", "len"];

/// Validates an assembled query result:
///
/// - every root declares a `func` argument;
/// - each query variable (`v as ...`) is defined at most once;
/// - each variable passed to `uid(..)`, `val(..)` or `len(..)` is defined
///   somewhere in the result.
///
/// Variables that are defined but never used are allowed, since the
/// mutation payload may refer to them.
pub fn validate_result(result: &QueryResult) -> Result<(), DqlParseError> {
    let mut definitions: IndexMap<&str, &DqlSourceSpan> = IndexMap::new();
    let mut usages: Vec<(&str, &DqlSourceSpan)> = Vec::new();

    for root in &result.roots {
        if root.argument("func").is_none() {
            let mut error = DqlParseError::new(
                format!("root function required in query block `{}`", root.attribute),
                root.span.clone(),
                DqlParseErrorKind::InvalidResult,
            );
            error.add_help(format!("Add an argument such as `{}(func: uid(0x1))`", root.attribute));
            return Err(error);
        }
        collect_variables(root, &mut definitions, &mut usages)?;
    }

    for (name, span) in usages {
        if !definitions.contains_key(name) {
            return Err(DqlParseError::new(
                format!("variable `{name}` is used but not defined"),
                span.clone(),
                DqlParseErrorKind::InvalidResult,
            ));
        }
    }

    Ok(())
}

fn collect_variables<'a>(
    node: &'a QueryNode,
    definitions: &mut IndexMap<&'a str, &'a DqlSourceSpan>,
    usages: &mut Vec<(&'a str, &'a DqlSourceSpan)>,
) -> Result<(), DqlParseError> {
    if let Some(var_name) = &node.var_name {
        if let Some(first) = definitions.get(var_name.as_str()) {
            let mut error = DqlParseError::new(
                format!("variable `{var_name}` is defined more than once"),
                node.span.clone(),
                DqlParseErrorKind::InvalidResult,
            );
            error.add_note_with_span("first defined here", (*first).clone());
            return Err(error);
        }
        definitions.insert(var_name, &node.span);
    }

    // `score: val(s)` selects through a variable just like an argument does.
    if VARIABLE_FUNCTIONS.contains(&node.attribute.as_str()) {
        collect_positional_names(&node.arguments, usages);
    }
    collect_argument_usages(&node.arguments, usages);
    for directive in &node.directives {
        collect_argument_usages(&directive.arguments, usages);
    }

    for field in node.fields() {
        collect_variables(field, definitions, usages)?;
    }
    Ok(())
}

fn collect_argument_usages<'a>(
    arguments: &'a [Argument],
    usages: &mut Vec<(&'a str, &'a DqlSourceSpan)>,
) {
    for argument in arguments {
        collect_value_usages(&argument.value, usages);
    }
}

fn collect_value_usages<'a>(value: &'a Value, usages: &mut Vec<(&'a str, &'a DqlSourceSpan)>) {
    match value {
        Value::Call { name, arguments, .. } => {
            if VARIABLE_FUNCTIONS.contains(&name.as_str()) {
                collect_positional_names(arguments, usages);
            }
            collect_argument_usages(arguments, usages);
        },
        Value::List { values, .. } | Value::Group { values, .. } => {
            for value in values {
                collect_value_usages(value, usages);
            }
        },
        Value::Name { .. }
        | Value::Int { .. }
        | Value::Float { .. }
        | Value::String { .. }
        | Value::Iri { .. }
        | Value::Variable { .. } => {},
    }
}

fn collect_positional_names<'a>(
    arguments: &'a [Argument],
    usages: &mut Vec<(&'a str, &'a DqlSourceSpan)>,
) {
    for argument in arguments {
        if argument.name.is_none()
            && let Value::Name { name, span } = &argument.value
        {
            usages.push((name, span));
        }
    }
}
