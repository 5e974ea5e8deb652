use crate::scene::Command;

/// Stable identity of an entry inside one tab list
///
/// Assigned when the entry joins a list and never reused, so tweens keyed by
/// it keep pointing at the same tab while the list is spliced around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntryId(pub(crate) u64);

/// Animatable visual property of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    LabelAlpha,
    IconAlpha,
    Scale,
    Width,
    Margin,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::LabelAlpha,
        Property::IconAlpha,
        Property::Scale,
        Property::Width,
        Property::Margin,
    ];

    /// Keep a value inside the property's valid range
    pub fn clamp(self, value: f32) -> f32 {
        match self {
            Property::LabelAlpha | Property::IconAlpha => value.clamp(0.0, 1.0),
            Property::Scale | Property::Width | Property::Margin => value.max(0.0),
        }
    }
}

/// Current visual state of an entry, written only by the tab controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Visuals {
    pub label_alpha: f32,
    pub icon_alpha: f32,
    pub scale: f32,
    pub width: f32,
    pub margin: f32,
}

impl Visuals {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::LabelAlpha => self.label_alpha,
            Property::IconAlpha => self.icon_alpha,
            Property::Scale => self.scale,
            Property::Width => self.width,
            Property::Margin => self.margin,
        }
    }

    pub(crate) fn set(&mut self, property: Property, value: f32) {
        let value = property.clamp(value);
        match property {
            Property::LabelAlpha => self.label_alpha = value,
            Property::IconAlpha => self.icon_alpha = value,
            Property::Scale => self.scale = value,
            Property::Width => self.width = value,
            Property::Margin => self.margin = value,
        }
    }
}

/// One tab of the strip
#[derive(Debug, Clone)]
pub struct Entry {
    id: EntryId,
    pub label: String,
    pub sub_label: String,
    /// Icon lookup key
    pub icon: String,
    /// Nested entries when the tab is itself a menu
    pub children: Vec<Entry>,
    command: Option<Command>,
    visuals: Visuals,
}

impl Entry {
    pub fn new(
        label: impl Into<String>,
        sub_label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::default(),
            label: label.into(),
            sub_label: sub_label.into(),
            icon: icon.into(),
            children: Vec::new(),
            command: None,
            visuals: Visuals::default(),
        }
    }

    /// Bind the command run when the entry is confirmed
    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_children(mut self, children: Vec<Entry>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    pub fn visuals(&self) -> &Visuals {
        &self.visuals
    }

    pub(crate) fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    pub(crate) fn visuals_mut(&mut self) -> &mut Visuals {
        &mut self.visuals
    }
}
