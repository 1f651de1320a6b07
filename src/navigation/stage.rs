//! Platform presentation primitives.

/// The windowing layer the navigator drives.
///
/// Screens and stacks are handles (cheap to clone, like reference-counted view
/// controllers); the stage owns the real objects.
pub trait Stage {
    /// A presentable unit.
    type Screen: Clone;

    /// A navigation stack, which can also act as a container for presentation.
    type Stack;

    /// The navigation stack of the top-most visible screen.
    fn top_stack(&self) -> Option<Self::Stack>;

    /// The top-most visible screen.
    fn top_screen(&self) -> Option<Self::Screen>;

    /// True if `screen` is itself a container and must not be wrapped again.
    fn is_container(&self, screen: &Self::Screen) -> bool;

    fn push(&mut self, stack: &Self::Stack, screen: Self::Screen, animated: bool);

    /// Install `screen` as the sole content of `container` and return the
    /// container as a presentable screen.
    fn embed(&mut self, container: Self::Stack, screen: Self::Screen) -> Self::Screen;

    fn present(&mut self, presenter: &Self::Screen, screen: Self::Screen, animated: bool);
}
