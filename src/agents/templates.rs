// Canned reply templates for the offline response simulator
//
// Only the three roles below carry a template; agents without one simply
// produce no simulated reply.

/// A fixed reply template for one agent role
pub struct ReplyTemplate {
    pub agent_id: &'static str,
    pub body: &'static str,
}

impl ReplyTemplate {
    /// Render the template against the user's message
    ///
    /// The `{{message}}` placeholder is replaced with the raw user text;
    /// templates without the placeholder render unchanged.
    pub fn render(&self, message: &str) -> String {
        self.body.replace("{{message}}", message)
    }
}

pub mod library {
    use super::ReplyTemplate;

    /// Looks up the template for an agent id, if that role has one
    pub fn for_agent(agent_id: &str) -> Option<ReplyTemplate> {
        match agent_id {
            "pm" => Some(product_manager()),
            "tech" => Some(tech_architect()),
            "market" => Some(market_analyst()),
            _ => None,
        }
    }

    pub fn product_manager() -> ReplyTemplate {
        ReplyTemplate {
            agent_id: "pm",
            body: "I'll help break down \"{{message}}\" into actionable components. \
                   Let me analyze the requirements and create a structured plan.",
        }
    }

    pub fn tech_architect() -> ReplyTemplate {
        ReplyTemplate {
            agent_id: "tech",
            body: "From a technical perspective, I recommend we start with a modern \
                   tech stack. I'll outline the architecture and suggest the best \
                   frameworks for this project.",
        }
    }

    pub fn market_analyst() -> ReplyTemplate {
        ReplyTemplate {
            agent_id: "market",
            body: "I'll research the competitive landscape and market opportunities. \
                   Let me gather data on similar solutions and identify gaps we can \
                   fill.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitutes_message() {
        let template = library::product_manager();

        let rendered = template.render("build an AI tool");

        assert!(rendered.contains("\"build an AI tool\""));
        assert!(!rendered.contains("{{message}}"));
    }

    #[test]
    fn test_templates_exist_for_three_roles_only() {
        assert!(library::for_agent("pm").is_some());
        assert!(library::for_agent("tech").is_some());
        assert!(library::for_agent("market").is_some());
        assert!(library::for_agent("pitch").is_none());
        assert!(library::for_agent("sprint").is_none());
        assert!(library::for_agent("ghost").is_none());
    }

    #[test]
    fn test_fixed_templates_render_unchanged() {
        let template = library::tech_architect();

        assert_eq!(template.render("anything"), template.body);
    }
}
