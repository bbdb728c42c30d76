//! Object type declaration and shared operation tables.
//!
//! [`object_table!`] declares, for one object type:
//! - one parameter bundle struct per operation (fields default-initialized)
//! - the table struct, one `fn(&mut T, Bundle) -> Ret` pointer per operation
//! - a single `static` table value, built at compile time
//! - [`TypeMeta`] describing names and signatures for dynamic callers
//!
//! Calls go through [`invoke!`]. Unknown operations, unknown bundle fields
//! and mistyped arguments are compile errors on that path.

use crate::error::{ObjectError, Result};
use crate::value::{FromValue, Value, ValueKind};

/// Signature metadata for one object type.
#[derive(Debug)]
pub struct TypeMeta {
    pub name: &'static str,
    /// Operations in declaration order
    pub ops: &'static [OpMeta],
}

impl TypeMeta {
    pub fn op(&self, name: &str) -> Option<&'static OpMeta> {
        self.ops.iter().find(|op| op.name == name)
    }
}

#[derive(Debug)]
pub struct OpMeta {
    pub name: &'static str,
    pub params: &'static [ParamMeta],
    pub ret: ValueKind,
}

#[derive(Debug)]
pub struct ParamMeta {
    pub name: &'static str,
    pub kind: ValueKind,
}

/// Implemented by [`object_table!`]; do not implement by hand.
pub trait ObjectType: Sized + 'static {
    /// The table struct: one routine pointer per operation.
    type Funcs: 'static;

    const NAME: &'static str;

    /// The one process-wide table for this type.
    fn funcs() -> &'static Self::Funcs;

    fn meta() -> &'static TypeMeta;

    /// Resolve `op` by name through `funcs` and call it with `args`.
    fn dispatch(
        &mut self,
        funcs: &'static Self::Funcs,
        op: &str,
        args: &[Value],
    ) -> Result<Value>;
}

/// A parameter bundle.
pub trait Params: Default + Sized {
    const FIELDS: &'static [ParamMeta];

    /// Build the bundle from positional arguments, checking arity and kinds.
    fn from_values(type_name: &'static str, op: &'static str, args: &[Value]) -> Result<Self>;
}

/// Default bundle for the routine's parameter type.
///
/// Lets [`invoke!`] name the bundle through the routine pointer alone.
#[inline]
pub fn default_params<T, P: Default, R>(_routine: &fn(&mut T, P) -> R) -> P {
    P::default()
}

/// Positional arguments being read into a parameter bundle.
#[doc(hidden)]
pub struct ArgReader<'a> {
    type_name: &'static str,
    op: &'static str,
    expected: usize,
    values: &'a [Value],
    next: usize,
}

impl<'a> ArgReader<'a> {
    /// Fails with `Arity` unless exactly `expected` values were supplied.
    pub fn new(
        type_name: &'static str,
        op: &'static str,
        expected: usize,
        values: &'a [Value],
    ) -> Result<Self> {
        if values.len() != expected {
            return Err(ObjectError::Arity {
                type_name,
                op,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { type_name, op, expected, values, next: 0 })
    }

    /// Convert the next value into the field type of `param`.
    pub fn take<T: FromValue>(&mut self, param: &'static str) -> Result<T> {
        let arg = self.values.get(self.next).ok_or(ObjectError::Arity {
            type_name: self.type_name,
            op: self.op,
            expected: self.expected,
            found: self.values.len(),
        })?;
        self.next += 1;
        T::from_value(arg).ok_or(ObjectError::TypeMismatch {
            type_name: self.type_name,
            op: self.op,
            param,
            expected: T::KIND,
            found: arg.kind(),
        })
    }
}

/// Declare the shared operation table of an object type.
///
/// ```ignore
/// object_table! {
///     /// Operations of [`Counter`].
///     pub struct CounterFuncs for Counter {
///         fn add(CounterAdd { n: f64 }) -> () = Counter::add;
///         fn get(CounterGet {}) -> f64 = Counter::get;
///     }
/// }
/// ```
///
/// Each routine must have the signature `fn(&mut Counter, Bundle) -> Ret`.
/// Bundles also implement `From<(fields...)>` for positional calls.
#[macro_export]
macro_rules! object_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $funcs:ident for $ty:ident {
            $(
                $(#[$op_meta:meta])*
                fn $op:ident($params:ident { $($field:ident : $fty:ty),* $(,)? }) -> $ret:ty = $routine:path;
            )*
        }
    ) => {
        $(
            #[doc = concat!("Parameter bundle for `", stringify!($ty), "::", stringify!($op), "`.")]
            #[derive(Debug, Clone, Default)]
            $vis struct $params {
                $(pub $field: $fty,)*
            }

            impl ::core::convert::From<($($fty,)*)> for $params {
                #[allow(unused_variables, clippy::unused_unit)]
                fn from(args: ($($fty,)*)) -> Self {
                    let ($($field,)*) = args;
                    Self { $($field,)* }
                }
            }

            impl $crate::table::Params for $params {
                const FIELDS: &'static [$crate::table::ParamMeta] = &[
                    $($crate::table::ParamMeta {
                        name: stringify!($field),
                        kind: <$fty as $crate::value::FromValue>::KIND,
                    },)*
                ];

                #[allow(unused_mut, unused_variables)]
                fn from_values(
                    type_name: &'static str,
                    op: &'static str,
                    args: &[$crate::value::Value],
                ) -> $crate::Result<Self> {
                    let mut args =
                        $crate::table::ArgReader::new(type_name, op, Self::FIELDS.len(), args)?;
                    Ok(Self {
                        $($field: args.take(stringify!($field))?,)*
                    })
                }
            }
        )*

        $(#[$meta])*
        $vis struct $funcs {
            $(
                $(#[$op_meta])*
                pub $op: fn(&mut $ty, $params) -> $ret,
            )*
        }

        impl $crate::table::ObjectType for $ty {
            type Funcs = $funcs;

            const NAME: &'static str = stringify!($ty);

            fn funcs() -> &'static $funcs {
                static FUNCS: $funcs = $funcs {
                    $($op: $routine,)*
                };
                &FUNCS
            }

            fn meta() -> &'static $crate::table::TypeMeta {
                static META: $crate::table::TypeMeta = $crate::table::TypeMeta {
                    name: stringify!($ty),
                    ops: &[
                        $($crate::table::OpMeta {
                            name: stringify!($op),
                            params: <$params as $crate::table::Params>::FIELDS,
                            ret: <$ret as $crate::value::IntoReturn>::KIND,
                        },)*
                    ],
                };
                &META
            }

            fn dispatch(
                &mut self,
                funcs: &'static $funcs,
                op: &str,
                args: &[$crate::value::Value],
            ) -> $crate::Result<$crate::value::Value> {
                match op {
                    $(
                        stringify!($op) => {
                            let params = <$params as $crate::table::Params>::from_values(
                                stringify!($ty),
                                stringify!($op),
                                args,
                            )?;
                            $crate::value::IntoReturn::into_return((funcs.$op)(self, params))
                        }
                    )*
                    _ => Err($crate::ObjectError::UnknownOperation {
                        type_name: stringify!($ty),
                        op: op.to_string(),
                    }),
                }
            }
        }
    };
}

/// Invoke an operation through an instance's bound table.
///
/// - `invoke!(obj.op(a, b))` passes every bundle field positionally.
/// - `invoke!(obj.op { name: value })` sets named fields; the rest keep their defaults.
#[macro_export]
macro_rules! invoke {
    ($obj:ident . $op:ident { $($field:ident : $val:expr),* $(,)? }) => {{
        let routine = $obj.funcs().$op;
        #[allow(unused_mut)]
        let mut params = $crate::table::default_params(&routine);
        $(params.$field = $val;)*
        routine($obj.state_mut(), params)
    }};
    ($obj:ident . $op:ident ( $($arg:expr),* $(,)? )) => {{
        let routine = $obj.funcs().$op;
        routine($obj.state_mut(), ::core::convert::From::from(($($arg,)*)))
    }};
}

#[cfg(test)]
mod tests {
    use crate::object::{DynObject, Object};
    use crate::table::{ArgReader, ObjectType};
    use crate::value::{Value, ValueKind};
    use crate::ObjectError;

    #[derive(Debug, Default)]
    struct Counter {
        total: f64,
        label: String,
    }

    impl Counter {
        fn add(&mut self, params: CounterAdd) {
            self.total += params.n * params.scale.max(1.0);
        }

        fn get(&mut self, _: CounterGet) -> f64 {
            self.total
        }

        fn rename(&mut self, params: CounterRename) -> String {
            std::mem::replace(&mut self.label, params.label)
        }
    }

    crate::object_table! {
        struct CounterFuncs for Counter {
            fn add(CounterAdd { n: f64, scale: f64 }) -> () = Counter::add;
            fn get(CounterGet {}) -> f64 = Counter::get;
            fn rename(CounterRename { label: String }) -> String = Counter::rename;
        }
    }

    #[test]
    fn test_positional_and_named_invoke() {
        let mut c = Object::<Counter>::new();
        crate::invoke!(c.add(2.0, 3.0));
        // scale left at its default of 0.0, clamped to 1.0
        crate::invoke!(c.add { n: 4.0 });
        assert_eq!(crate::invoke!(c.get()), 10.0);
    }

    #[test]
    fn test_table_is_shared() {
        let a = Object::<Counter>::new();
        let b = Object::<Counter>::new();
        assert!(a.shares_table_with(&b));
        assert!(std::ptr::eq(a.funcs(), Counter::funcs()));
    }

    #[test]
    fn test_meta_describes_signatures() {
        let meta = Counter::meta();
        assert_eq!(meta.name, "Counter");
        let names: Vec<_> = meta.ops.iter().map(|op| op.name).collect();
        assert_eq!(names, ["add", "get", "rename"]);

        let add = meta.op("add").unwrap();
        assert_eq!(add.params.len(), 2);
        assert_eq!(add.params[1].name, "scale");
        assert_eq!(add.ret, ValueKind::Unit);
        assert_eq!(meta.op("rename").unwrap().ret, ValueKind::Text);
        assert!(meta.op("reset").is_none());
    }

    #[test]
    fn test_dynamic_invoke() {
        let mut c = Object::<Counter>::new();
        c.invoke("add", &[Value::Float(1.5), Value::Float(2.0)]).unwrap();
        let total = c.invoke("get", &[]).unwrap();
        assert!(matches!(total, Value::Float(v) if v == 3.0));

        let old = c.invoke("rename", &[Value::Text("hits".into())]).unwrap();
        assert!(matches!(old, Value::Text(ref s) if s.is_empty()));
        assert_eq!(c.state().label, "hits");
    }

    #[test]
    fn test_dynamic_invoke_fails_fast() {
        let mut c = Object::<Counter>::new();

        let err = c.invoke("reset", &[]).unwrap_err();
        assert!(matches!(
            err,
            ObjectError::UnknownOperation { type_name: "Counter", ref op } if op == "reset"
        ));

        let err = c.invoke("add", &[Value::Float(1.0)]).unwrap_err();
        assert!(matches!(err, ObjectError::Arity { expected: 2, found: 1, .. }));

        let err = c.invoke("add", &[Value::Float(1.0), Value::Text("x".into())]).unwrap_err();
        assert!(matches!(
            err,
            ObjectError::TypeMismatch {
                param: "scale",
                expected: ValueKind::Float,
                found: ValueKind::Text,
                ..
            }
        ));

        // nothing ran
        assert_eq!(c.state().total, 0.0);
    }

    #[test]
    fn test_arg_reader_reports_real_arity() {
        let values = [Value::Float(1.0), Value::Float(2.0)];
        let mut reader = ArgReader::new("Counter", "add", 2, &values).unwrap();
        assert_eq!(reader.take::<f64>("n").unwrap(), 1.0);
        assert_eq!(reader.take::<f64>("scale").unwrap(), 2.0);

        let err = reader.take::<f64>("extra").unwrap_err();
        assert!(matches!(err, ObjectError::Arity { op: "add", expected: 2, found: 2, .. }));

        let err = ArgReader::new("Counter", "add", 2, &values[..1]).err().unwrap();
        assert!(matches!(err, ObjectError::Arity { expected: 2, found: 1, .. }));
    }
}
