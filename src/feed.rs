//! Tabbed material feed.

use tracing::debug;

use crate::models::{FeedItem, FeedSections, Section};
use crate::template::{Action, FEED_ITEM_TEMPLATE, Node, TemplateError, TemplateRegistry, Templates};

const TAB_CLASSES: &str = "tabs-link button-transparent";
const ACTIVE_CLASS: &str = "active";

/// Renders one section of the preloaded feed at a time.
pub struct FeedController<T = TemplateRegistry> {
    sections: FeedSections,
    templates: T,
    active: Section,
    list: Node,
}

impl<T: Templates> FeedController<T> {
    /// Builds the controller and shows the topics section.
    pub fn new(sections: FeedSections, templates: T) -> Result<Self, TemplateError> {
        let mut controller = Self {
            sections,
            templates,
            active: Section::Topics,
            list: Node::new("material-feed-list"),
        };
        controller.select(Section::Topics)?;
        Ok(controller)
    }

    /// Shows `section` and makes it the only active tab.
    pub fn select(&mut self, section: Section) -> Result<(), TemplateError> {
        self.show_section(section.key(), section.label())?;
        self.active = section;
        Ok(())
    }

    /// Replaces the visible list with the items stored under `key`.
    ///
    /// An unknown key renders an empty list. Cards link their badge to
    /// `/{key}` and show `label` on it. On error the previous list stays.
    pub fn show_section(&mut self, key: &str, label: &str) -> Result<(), TemplateError> {
        let items = self.items(key);
        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            rows.push(self.render_item(item, key, label)?);
        }

        debug!(section = key, rows = rows.len(), "rendered feed section");
        self.list.replace_children(rows);
        Ok(())
    }

    fn render_item(&self, item: &FeedItem, key: &str, label: &str) -> Result<Node, TemplateError> {
        let mut node = self.templates.clone_template(FEED_ITEM_TEMPLATE)?;
        node.add_class(key);

        node.require_mut("feed-item-header")?.background_image = item.image_url.clone();
        node.require_mut("activity-views")?.text = item.view_count.to_string();
        node.require_mut("feed-item-content-link")?.href = Some(item.url.clone());
        node.require_mut("feed-item-content")?.text = item.title.clone();

        let tape = node.require_mut("info-tape")?;
        tape.href = Some(format!("/{}", key));
        tape.text = label.to_string();

        Ok(node)
    }

    pub fn items(&self, key: &str) -> &[FeedItem] {
        self.sections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    /// The rendered list of feed cards.
    pub fn list(&self) -> &Node {
        &self.list
    }

    /// One tab button per section, with exactly the active one marked.
    pub fn tab_bar(&self) -> Node {
        let tabs = Section::ALL
            .into_iter()
            .map(|section| {
                let mut tab = Node::new(format!("{}-button", section.key()))
                    .with_class(TAB_CLASSES)
                    .with_text(section.title())
                    .with_action(Action::SelectSection(section));
                if section == self.active {
                    tab.add_class(ACTIVE_CLASS);
                }
                tab
            })
            .collect();

        let mut bar = Node::new("tabs");
        bar.replace_children(tabs);
        bar
    }
}
