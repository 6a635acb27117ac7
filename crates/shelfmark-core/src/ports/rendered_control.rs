use crate::book::BookDescriptor;

/// One rendered favorite control, as exposed by the rendering collaborator.
///
/// The core never constructs rendered output; it only asks the collaborator
/// to restyle, relabel, or drop the element it owns. Activation flows the
/// other way: the collaborator invokes the bound control object when the
/// user triggers it.
pub trait RenderedControlPort: Send + Sync {
    /// Book bound to the control's rendered context, when that context
    /// carries the required key.
    fn descriptor(&self) -> Option<BookDescriptor>;

    /// Toggle the highlight treatment on the control and its icon.
    fn set_highlighted(&self, on: bool);

    /// Swap the control's label text.
    fn set_label(&self, label: &str);

    /// Remove the control's rendered representation entirely.
    fn detach(&self);
}
