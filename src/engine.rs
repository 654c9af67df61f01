//! The fetch-and-accumulate loop.

use crate::resolver::Resolver;
use crate::script::Script;
use crate::store::ParameterStore;

/// Result of one pass over the variable names.
#[derive(Debug)]
pub struct Wrapped {
    pub script: Script,
    /// Names whose lookup failed, in input order.
    pub skipped: Vec<String>,
}

/// Resolve every name in order and collect the exports.
///
/// Lookups run one at a time. A failed lookup is reported on stdout and
/// the name is left out; the remaining names are still processed.
pub async fn wrap<S, N>(resolver: &Resolver<S>, header: &str, names: N) -> Wrapped
where
    S: ParameterStore,
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    let mut script = Script::new(header);
    let mut skipped = Vec::new();

    for name in names {
        let name = name.as_ref();
        match resolver.resolve(name).await {
            Ok(value) => script.export(name, &value),
            Err(err) => {
                println!("Error: Could not find parameter: {err}");
                println!("Skipped parameter: {name}");
                skipped.push(name.to_string());
            }
        }
    }

    Wrapped { script, skipped }
}
