//! `becaps types` command - list registered object types.

use becaps_runtime::{registry, TypeMeta, ValueKind};

pub fn run() -> anyhow::Result<()> {
    for entry in registry::entries() {
        print!("{}", describe((entry.meta)()));
    }
    Ok(())
}

/// Render one type as `Name` followed by one indented signature per operation.
pub fn describe(meta: &TypeMeta) -> String {
    let mut out = format!("{}\n", meta.name);
    for op in meta.ops {
        let params: Vec<String> = op
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind))
            .collect();
        out.push_str(&format!("  {}({})", op.name, params.join(", ")));
        if op.ret != ValueKind::Unit {
            out.push_str(&format!(" -> {}", op.ret));
        }
        out.push('\n');
    }
    out
}
