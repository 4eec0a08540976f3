//! Pure rendering of a [`CounterState`] into an inspectable tree.
//!
//! [`render`] has no hidden inputs: the same state always produces the same
//! tree. Terminal drawing consumes the tree, and tests can inspect it
//! directly by [`RegionId`] without caring about layout or colours.

use crate::counter::{CounterState, Transition};

/// Error text shown after a rejected decrement.
pub const ERROR_TEXT: &str = "The counter can't go below 0";

/// Count display text for `count`.
pub fn display_text(count: u64) -> String {
    format!("You've clicked the button {count} times")
}

/// Stable, externally addressable regions of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    App,
    CounterDisplay,
    ErrorMessage,
    IncrementButton,
    DecrementButton,
    ResetButton,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::App,
        RegionId::CounterDisplay,
        RegionId::ErrorMessage,
        RegionId::IncrementButton,
        RegionId::DecrementButton,
        RegionId::ResetButton,
    ];

    /// The test id a harness uses to find this region.
    pub fn test_id(self) -> &'static str {
        match self {
            RegionId::App => "component-app",
            RegionId::CounterDisplay => "counter-display",
            RegionId::ErrorMessage => "error-element",
            RegionId::IncrementButton => "increment-button",
            RegionId::DecrementButton => "decrement-button",
            RegionId::ResetButton => "reset-button",
        }
    }

    pub fn from_test_id(id: &str) -> Option<RegionId> {
        RegionId::ALL.into_iter().find(|r| r.test_id() == id)
    }

    /// The control region that triggers `transition`.
    pub fn for_transition(transition: Transition) -> RegionId {
        match transition {
            Transition::Increment => RegionId::IncrementButton,
            Transition::Decrement => RegionId::DecrementButton,
            Transition::Reset => RegionId::ResetButton,
        }
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Text(String),
    /// An activatable control with a label.
    Control { label: String, on_activate: Transition },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub id: Option<RegionId>,
    pub kind: NodeKind,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    fn container(id: Option<RegionId>, children: Vec<ViewNode>) -> Self {
        Self {
            id,
            kind: NodeKind::Container,
            children,
        }
    }

    fn text(id: RegionId, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            kind: NodeKind::Text(text.into()),
            children: Vec::new(),
        }
    }

    fn control(transition: Transition) -> Self {
        Self {
            id: Some(RegionId::for_transition(transition)),
            kind: NodeKind::Control {
                label: transition.label().to_string(),
                on_activate: transition,
            },
            children: Vec::new(),
        }
    }

    /// All visible text in this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Container => {}
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Control { label, .. } => out.push_str(label),
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// The transition this node triggers, if it is a control.
    pub fn activation(&self) -> Option<Transition> {
        match self.kind {
            NodeKind::Control { on_activate, .. } => Some(on_activate),
            _ => None,
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// The rendered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    root: ViewNode,
}

impl ViewTree {
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// First node carrying `id`.
    pub fn find(&self, id: RegionId) -> Option<&ViewNode> {
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() && node.id == Some(id) {
                found = Some(node);
            }
        });
        found
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        RegionId::from_test_id(test_id).and_then(|id| self.find(id))
    }

    /// How many nodes carry `id` (0 or 1 for a well-formed tree).
    pub fn count(&self, id: RegionId) -> usize {
        let mut n = 0;
        self.root.walk(&mut |node| {
            if node.id == Some(id) {
                n += 1;
            }
        });
        n
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.find(id).is_some()
    }

    /// Controls in display order.
    pub fn controls(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        self.root.walk(&mut |node| {
            if node.activation().is_some() {
                out.push(node);
            }
        });
        out
    }
}

/// Render `state` into a [`ViewTree`].
pub fn render(state: &CounterState) -> ViewTree {
    let mut children = vec![ViewNode::text(
        RegionId::CounterDisplay,
        display_text(state.counter()),
    )];
    if state.error() {
        children.push(ViewNode::text(RegionId::ErrorMessage, ERROR_TEXT));
    }
    children.push(ViewNode::container(
        None,
        Transition::ALL.into_iter().map(ViewNode::control).collect(),
    ));

    ViewTree {
        root: ViewNode::container(Some(RegionId::App), children),
    }
}
