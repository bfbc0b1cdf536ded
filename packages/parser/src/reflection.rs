//! Reflective name-resolution service.
//!
//! Member and method nodes are bound eagerly: while the grammar engine is
//! still consuming tokens it asks this service for the accessor behind each
//! name it reads, and stores the result in the AST node. Names unknown at
//! parse time resolve to `None`; resolution failures are never parse errors.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Reads a property off a host value.
#[derive(Clone)]
pub struct GetterFn(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

/// Writes a property on a host value.
#[derive(Clone)]
pub struct SetterFn(Arc<dyn Fn(&mut Value, Value) + Send + Sync>);

/// Invokes a method on a host value with positional arguments.
#[derive(Clone)]
pub struct MethodFn(Arc<dyn Fn(&Value, &[Value]) -> Value + Send + Sync>);

impl GetterFn {
    pub fn new(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        GetterFn(Arc::new(f))
    }

    pub fn read(&self, receiver: &Value) -> Value {
        (self.0)(receiver)
    }
}

impl SetterFn {
    pub fn new(f: impl Fn(&mut Value, Value) + Send + Sync + 'static) -> Self {
        SetterFn(Arc::new(f))
    }

    pub fn write(&self, receiver: &mut Value, value: Value) {
        (self.0)(receiver, value)
    }
}

impl MethodFn {
    pub fn new(f: impl Fn(&Value, &[Value]) -> Value + Send + Sync + 'static) -> Self {
        MethodFn(Arc::new(f))
    }

    pub fn invoke(&self, receiver: &Value, args: &[Value]) -> Value {
        (self.0)(receiver, args)
    }
}

impl fmt::Debug for GetterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GetterFn")
    }
}

impl fmt::Debug for SetterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SetterFn")
    }
}

impl fmt::Debug for MethodFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MethodFn")
    }
}

/// Resolves identifier names to accessors and invokers against a host
/// object shape. Injected into the parser; must be safe for concurrent
/// reads.
pub trait Reflector: Send + Sync {
    fn getter(&self, name: &str) -> Option<GetterFn>;
    fn setter(&self, name: &str) -> Option<SetterFn>;
    fn method(&self, name: &str) -> Option<MethodFn>;
}

/// Default reflector over `serde_json::Value` object shapes.
///
/// Field reads on non-objects or missing keys yield `Value::Null`; writes on
/// non-objects are dropped. Methods cannot be resolved against a plain data
/// shape, so `method` returns the unknown-name placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReflector;

impl Reflector for JsonReflector {
    fn getter(&self, name: &str) -> Option<GetterFn> {
        let name = name.to_string();
        Some(GetterFn::new(move |receiver| {
            receiver.get(&name).cloned().unwrap_or(Value::Null)
        }))
    }

    fn setter(&self, name: &str) -> Option<SetterFn> {
        let name = name.to_string();
        Some(SetterFn::new(move |receiver, value| {
            if let Value::Object(map) = receiver {
                map.insert(name.clone(), value);
            }
        }))
    }

    fn method(&self, _name: &str) -> Option<MethodFn> {
        None
    }
}
