//! The in-language macro layer.
//!
//! These macros are the declarative counterpart of the generative
//! resolver: the macro system's pattern matching recovers the argument
//! count natively, and `paste` performs the token concatenation that
//! composes the target identifier. An undefined `<base><N>` target fails
//! compilation with an unresolved-name error at the call site; more than
//! nine arguments fail with an explicit `compile_error!`.

/// Dispatches a call to `<base><N>` where `N` is the number of supplied
/// arguments, 0 through 9.
///
/// The target for each count the program actually uses must be defined,
/// or compilation fails at the call site:
///
/// ```
/// use varity::vcall;
///
/// fn greet0() -> &'static str { "hello" }
/// fn greet1(name: &str) -> String { format!("hello, {name}") }
///
/// assert_eq!(vcall!(greet), "hello");
/// assert_eq!(vcall!(greet, "world"), "hello, world");
/// ```
#[macro_export]
macro_rules! vcall {
    ($base:ident $(,)?) => {
        $crate::paste::paste! { [<$base 0>]() }
    };
    ($base:ident, $a0:expr $(,)?) => {
        $crate::paste::paste! { [<$base 1>]($a0) }
    };
    ($base:ident, $a0:expr, $a1:expr $(,)?) => {
        $crate::paste::paste! { [<$base 2>]($a0, $a1) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::paste::paste! { [<$base 3>]($a0, $a1, $a2) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::paste::paste! { [<$base 4>]($a0, $a1, $a2, $a3) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::paste::paste! { [<$base 5>]($a0, $a1, $a2, $a3, $a4) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::paste::paste! { [<$base 6>]($a0, $a1, $a2, $a3, $a4, $a5) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::paste::paste! { [<$base 7>]($a0, $a1, $a2, $a3, $a4, $a5, $a6) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr $(,)?) => {
        $crate::paste::paste! { [<$base 8>]($a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7) }
    };
    ($base:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr $(,)?) => {
        $crate::paste::paste! { [<$base 9>]($a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8) }
    };
    ($base:ident, $($rest:expr),+ $(,)?) => {
        ::core::compile_error!("`vcall!` dispatches at most 9 arguments")
    };
}

/// Implements the event contract for a type.
///
/// Expands to the inherent `static_type` tag accessor plus the `Event`
/// accessors (`event_type`, `name`, `category_flags`). The contract items
/// (`Event`, `EventType`, `EventCategory`) are resolved at the call site;
/// the invoking module brings its own.
///
/// ```
/// use varity::{bit, event_class};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum EventType { WindowClose }
///
/// pub type EventCategory = u32;
///
/// pub trait Event {
///     fn event_type(&self) -> EventType;
///     fn name(&self) -> &'static str;
///     fn category_flags(&self) -> EventCategory;
/// }
///
/// pub const CATEGORY_APPLICATION: EventCategory = bit!(0);
///
/// pub struct WindowClose;
/// event_class!(WindowClose, CATEGORY_APPLICATION);
///
/// assert_eq!(WindowClose.name(), "WindowClose");
/// assert_eq!(WindowClose.event_type(), EventType::WindowClose);
/// assert_eq!(WindowClose.category_flags(), CATEGORY_APPLICATION);
/// ```
#[macro_export]
macro_rules! event_class {
    ($ty:ident, $category:expr) => {
        impl $ty {
            /// Tag identifying this event type, available without an
            /// instance.
            pub fn static_type() -> EventType {
                EventType::$ty
            }
        }

        impl Event for $ty {
            fn event_type(&self) -> EventType {
                Self::static_type()
            }

            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn category_flags(&self) -> EventCategory {
                $category
            }
        }
    };
}

/// Wraps a method call into a callable that captures the receiver.
///
/// Two forms, dispatched by argument count:
///
/// - `bind_fn!(receiver, method)` captures `receiver` and calls
///   `receiver.method(arg)` when invoked. Inside a method, the receiver
///   is spelled `self`.
/// - `bind_fn!(path)` wraps a function path in scope.
///
/// The receiver must outlive every invocation of the produced callable;
/// when the receiver is a borrow, the borrow checker ties the callable
/// to it.
#[macro_export]
macro_rules! bind_fn {
    ($recv:expr, $method:ident $(,)?) => {
        $crate::__bind_fn_impl_2!($recv, $method)
    };
    ($method:path $(,)?) => {
        $crate::__bind_fn_impl_1!($method)
    };
}

/// One-argument binder implementation: wraps a function path.
#[doc(hidden)]
#[macro_export]
macro_rules! __bind_fn_impl_1 {
    ($method:path) => {
        move |arg| $method(arg)
    };
}

/// Two-argument binder implementation: captures an explicit receiver.
#[doc(hidden)]
#[macro_export]
macro_rules! __bind_fn_impl_2 {
    ($recv:expr, $method:ident) => {{
        let handle = $recv;
        move |arg| handle.$method(arg)
    }};
}

/// A single category-flag bit: `bit!(3)` is `1 << 3`.
#[macro_export]
macro_rules! bit {
    ($x:expr) => {
        (1 << $x)
    };
}
