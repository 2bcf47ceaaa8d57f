pub const SIMPLE_UPSERT: &str = include_str!("simple_upsert.dql");
pub const COMPLEX_UPSERT: &str = include_str!("complex_upsert.dql");

/// A bare mutation block whose `set` payload holds `triples` N-Quads.
pub fn large_set_mutation(triples: usize) -> String {
    let mut source = String::from("{\n  set {\n");
    for i in 0..triples {
        source.push_str(&format!(
            "    _:n{i} <name> \"node {i} {{with braces}}\" .\n    _:n{i} <dgraph.type> \"Node\" .\n",
        ));
    }
    source.push_str("  }\n}\n");
    source
}

/// An upsert whose single query root nests `depth` selection sets.
pub fn nested_upsert(depth: usize) -> String {
    let mut source = String::from("upsert { query { q(func: has(name)) { ");
    for i in 0..depth {
        source.push_str(&format!("f{i} {{ "));
    }
    source.push_str("uid");
    for _ in 0..depth {
        source.push_str(" }");
    }
    source.push_str(" } } }");
    source
}

/// An upsert with `count` query roots sharing one fragment.
pub fn many_roots_upsert(count: usize) -> String {
    let mut source = String::from("upsert {\n  query {\n");
    for i in 0..count {
        source.push_str(&format!(
            "    q{i}(func: eq(email, \"user{i}@example.com\")) {{ v{i} as uid ...person }}\n",
        ));
    }
    source.push_str("  }\n  fragment person { name email }\n}\n");
    source
}
