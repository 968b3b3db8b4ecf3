//! Render a registered function's parameter and return lists.

use crate::error::SignatureError;
use crate::registry::{Binding, FuncDescriptor};

/// Rendered signature of one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// e.g. `a int, b int` or `int, ...any`
    pub params: String,
    /// e.g. `string, error`
    pub returns: String,
    pub return_types: Vec<String>,
}

/// Render the signature of `binding`, naming parameters positionally from
/// `arg_names`. Names beyond the parameter count are ignored; parameters
/// beyond the names are rendered by type alone.
pub fn synthesize(
    name: &str,
    binding: &Binding,
    arg_names: &[String],
) -> Result<Signature, SignatureError> {
    match binding {
        Binding::Func(desc) => Ok(render(desc, arg_names)),
        Binding::Value { .. } => Err(SignatureError::NotCallable {
            name: name.to_string(),
            kind: binding.kind().to_string(),
        }),
    }
}

fn render(desc: &FuncDescriptor, arg_names: &[String]) -> Signature {
    let last = desc.params.len().saturating_sub(1);

    let params: Vec<String> = desc
        .params
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            let mut typename = ty.to_string();
            if desc.variadic && i == last {
                typename = format!("...{}", typename);
            }
            match arg_names.get(i) {
                Some(arg) => format!("{} {}", arg, typename),
                None => typename,
            }
        })
        .collect();

    let return_types: Vec<String> = desc.returns.iter().map(|ty| ty.to_string()).collect();

    Signature {
        params: params.join(", "),
        returns: return_types.join(", "),
        return_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn func(desc: FuncDescriptor) -> Binding {
        Binding::Func(desc)
    }

    #[test]
    fn named_two_parameter_function() {
        let add = func(FuncDescriptor::new().param("int").param("int").returns("int"));
        let sig = synthesize("Add", &add, &names(&["a", "b"])).unwrap();
        assert_eq!(sig.params, "a int, b int");
        assert_eq!(sig.returns, "int");
    }

    #[test]
    fn fewer_names_than_parameters() {
        let f = func(FuncDescriptor::new().param("string").param("int"));
        let sig = synthesize("F", &f, &names(&["s"])).unwrap();
        assert_eq!(sig.params, "s string, int");
        assert_eq!(sig.returns, "");
        assert!(sig.return_types.is_empty());
    }

    #[test]
    fn extra_names_are_ignored() {
        let f = func(FuncDescriptor::new().param("string"));
        let sig = synthesize("F", &f, &names(&["s", "extra"])).unwrap();
        assert_eq!(sig.params, "s string");
    }

    #[test]
    fn any_renders_literally() {
        let f = func(FuncDescriptor::new().param("any").returns("any"));
        let sig = synthesize("F", &f, &[]).unwrap();
        assert_eq!(sig.params, "any");
        assert_eq!(sig.returns, "any");
    }

    #[test]
    fn variadic_last_parameter_with_and_without_name() {
        let f = func(FuncDescriptor::new().param("string").param("any").variadic());
        assert_eq!(synthesize("F", &f, &[]).unwrap().params, "string, ...any");
        assert_eq!(
            synthesize("F", &f, &names(&["sep", "values"])).unwrap().params,
            "sep string, values ...any"
        );
    }

    #[test]
    fn multiple_returns_joined() {
        let f = func(FuncDescriptor::new().returns("int64").returns("error"));
        let sig = synthesize("F", &f, &[]).unwrap();
        assert_eq!(sig.params, "");
        assert_eq!(sig.returns, "int64, error");
        assert_eq!(sig.return_types, names(&["int64", "error"]));
    }

    #[test]
    fn non_callable_is_error() {
        let v = Binding::Value {
            type_name: "bool".to_string(),
        };
        let err = synthesize("Debug", &v, &[]).unwrap_err();
        assert_eq!(
            err,
            SignatureError::NotCallable {
                name: "Debug".to_string(),
                kind: "bool".to_string()
            }
        );
    }
}
