//! The status message control.
//!
//! A [`StatusMessage`] is constructed per render cycle of its host, registers
//! itself as a leaf control under the hosting container, and is populated
//! either by direct text assignment or by a resource key. Key resolution runs
//! once, during [`prepare`](StatusMessage::prepare), and only when text was
//! not already explicitly supplied.

use std::fmt;

use placard_core::{ContainerId, ContainerResult, SharedContainerTree};
use placard_i18n::{CatalogStore, ResourceKey};

use crate::resolve::{ResolveError, resolve_text};

/// The type of message being displayed by a [`StatusMessage`] control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    /// No message kind; the control will never display.
    None,
    /// An error occurred during the processing of an operation.
    Error,
    /// A warning about a potential problem.
    Warning,
    /// An operation completed successfully.
    #[default]
    Success,
    /// An informational message.
    Information,
}

impl MessageKind {
    /// The kind as a static string, used by hosts to pick a presentation
    /// class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Success => "Success",
            Self::Information => "Information",
        }
    }

    /// Lowercase suffix for the kind's CSS class.
    fn css_suffix(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Information => "information",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of a message control.
///
/// `Suppressed` is entered when the kind is set to [`MessageKind::None`] and
/// is never left; it rejects every enabling transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisibilityState {
    Normal { visible: bool },
    Suppressed,
}

/// The rendered form of a message: display data for the hosting shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The display text.
    pub text: String,
    /// Space-separated class list: base class, kind class, then any user
    /// supplied class.
    pub class_attribute: String,
    /// Formatted inline style attribute, if one was set.
    pub style_attribute: Option<String>,
}

/// A control that displays a status message within a hosting container.
///
/// # Example
///
/// ```
/// use placard::prelude::*;
///
/// let tree = SharedContainerTree::new();
/// let module = tree.register_module("events", "events-catalog");
/// let panel = tree.register_region("panel");
/// tree.set_parent(panel, Some(module))?;
///
/// let mut catalog = Catalog::new();
/// catalog.insert("NoEventsFound", "No events found.");
/// let mut catalogs = CatalogStore::with_locale("en");
/// catalogs.mount("events-catalog", catalog);
///
/// let mut message = StatusMessage::new(&tree, panel)?;
/// message.set_kind(MessageKind::Information);
/// message.set_resource_key("NoEventsFound");
/// message.prepare(&catalogs)?;
///
/// let rendered = message.render().expect("visible message renders");
/// assert_eq!(rendered.text, "No events found.");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StatusMessage {
    tree: SharedContainerTree,
    id: ContainerId,
    kind: MessageKind,
    text: Option<String>,
    resource_key: Option<ResourceKey>,
    css_class: String,
    style: Option<String>,
    visibility: VisibilityState,
}

impl StatusMessage {
    /// Base CSS class carried by every rendered message.
    pub const BASE_CLASS: &'static str = "placard-message";

    /// Create a message control under `host`, registering it in the tree.
    pub fn new(tree: &SharedContainerTree, host: ContainerId) -> ContainerResult<Self> {
        let id = tree.register_control("status_message");
        if let Err(err) = tree.set_parent(id, Some(host)) {
            let _ = tree.remove(id);
            return Err(err);
        }
        Ok(Self {
            tree: tree.clone(),
            id,
            kind: MessageKind::default(),
            text: None,
            resource_key: None,
            css_class: String::new(),
            style: None,
            visibility: VisibilityState::Normal { visible: true },
        })
    }

    /// The control's node in the container tree.
    pub fn container_id(&self) -> ContainerId {
        self.id
    }

    /// The current message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Set the message kind.
    ///
    /// Setting [`MessageKind::None`] suppresses display permanently: the
    /// control stays invisible no matter what kind or visibility is requested
    /// afterwards.
    pub fn set_kind(&mut self, kind: MessageKind) {
        self.kind = kind;
        if kind == MessageKind::None && self.visibility != VisibilityState::Suppressed {
            tracing::debug!(
                target: "placard::message",
                id = ?self.id,
                "kind set to None, suppressing display permanently"
            );
            self.visibility = VisibilityState::Suppressed;
        }
    }

    /// Whether the control would currently display.
    pub fn is_visible(&self) -> bool {
        matches!(self.visibility, VisibilityState::Normal { visible: true })
    }

    /// Request a visibility change.
    ///
    /// Ignored while suppressed; once the kind was set to
    /// [`MessageKind::None`], visibility can never be forced true again.
    pub fn set_visible(&mut self, visible: bool) {
        match self.visibility {
            VisibilityState::Suppressed => {
                if visible {
                    tracing::debug!(
                        target: "placard::message",
                        id = ?self.id,
                        "ignoring request to show a suppressed message"
                    );
                }
            }
            VisibilityState::Normal { .. } => {
                self.visibility = VisibilityState::Normal { visible };
            }
        }
    }

    /// The display text, if populated.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the display text directly.
    ///
    /// Explicit text wins: [`prepare`](Self::prepare) will not overwrite it
    /// with a resolved value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The resource key, if one was supplied.
    pub fn resource_key(&self) -> Option<&ResourceKey> {
        self.resource_key.as_ref()
    }

    /// Set the resource key used to resolve the message text.
    pub fn set_resource_key(&mut self, key: impl Into<ResourceKey>) {
        self.resource_key = Some(key.into());
    }

    /// The user-supplied CSS class.
    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    /// Set an additional CSS class appended to the rendered class list.
    pub fn set_css_class(&mut self, class: impl Into<String>) {
        self.css_class = class.into();
    }

    /// The raw inline style, if one was set.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set an inline style rendered as a `style='…'` attribute.
    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Some(style.into());
    }

    /// The string form of the current kind, for presentation-class selection.
    pub fn style_hint(&self) -> &'static str {
        self.kind.as_str()
    }

    /// The space-separated class list the control renders with.
    pub fn class_attribute(&self) -> String {
        let mut classes = format!("{} {}-{}", Self::BASE_CLASS, Self::BASE_CLASS, self.kind.css_suffix());
        if !self.css_class.is_empty() {
            classes.push(' ');
            classes.push_str(&self.css_class);
        }
        classes
    }

    /// Render-cycle initialization.
    ///
    /// If a resource key was supplied and explicit text was not, resolve the
    /// key starting from this control's node and store the result as display
    /// text. With no key (or an empty one), the catalog lookup is not invoked
    /// at all.
    pub fn prepare(&mut self, catalogs: &CatalogStore) -> Result<(), ResolveError> {
        if self.text.is_some() {
            return Ok(());
        }
        let Some(key) = &self.resource_key else {
            return Ok(());
        };
        if key.is_empty() {
            return Ok(());
        }
        let resolved = self
            .tree
            .with_read(|tree| resolve_text(tree, catalogs, key, self.id))?;
        self.text = Some(resolved);
        Ok(())
    }

    /// Produce the display data, or `None` when the control does not render.
    ///
    /// A message renders only when it is visible, not suppressed, and every
    /// ancestor container is visible.
    pub fn render(&self) -> Option<Rendered> {
        if !self.is_visible() {
            return None;
        }
        if !self.tree.is_effectively_visible(self.id).unwrap_or(false) {
            return None;
        }
        Some(Rendered {
            text: self.text.clone().unwrap_or_default(),
            class_attribute: self.class_attribute(),
            style_attribute: self.style.as_ref().map(|s| format!("style='{s}'")),
        })
    }
}

impl Drop for StatusMessage {
    fn drop(&mut self) {
        // Deregister from the tree; the node may already be gone if the host
        // subtree was removed first.
        let _ = self.tree.remove(self.id);
    }
}

impl fmt::Debug for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusMessage")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("resource_key", &self.resource_key)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
