//! Component trait
//!
//! A component does all of its work in an associated `register` function that
//! receives `&mut Project`: it reads whatever earlier components contributed,
//! pushes its own scripts, dependencies, patterns and files, and finally hands
//! itself to the project with `Project::add_component`. After that the
//! component is read-only; synthesis only renders the files it registered.

use std::any::Any;
use std::fmt;

pub trait Component: Any + fmt::Debug {
    /// Short, stable name used in logs and `Project::component_kinds`
    fn kind(&self) -> &'static str;

    /// Downcasting hook for `Project::find`
    fn as_any(&self) -> &dyn Any;
}
