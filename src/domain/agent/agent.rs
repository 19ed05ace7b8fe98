use serde::{Deserialize, Serialize};

/// A named collaborator on the team roster
///
/// Agents are labeled assignees with an active flag, not autonomous
/// processes. Display metadata is immutable after seeding; only `active`
/// ever changes, via [`super::AgentRegistry::toggle_active`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub active: bool,
    pub description: String,
    pub capabilities: Vec<String>,
    pub expertise: String,
}

impl Agent {
    fn seeded(
        id: &str,
        name: &str,
        role: &str,
        avatar: &str,
        description: &str,
        capabilities: &[&str],
        expertise: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            avatar: avatar.to_string(),
            active: true,
            description: description.to_string(),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            expertise: expertise.to_string(),
        }
    }
}

/// The fixed five-agent roster every registry starts from
///
/// Membership never changes for the lifetime of the process.
pub(crate) fn seed_roster() -> Vec<Agent> {
    vec![
        Agent::seeded(
            "pm",
            "Product Manager",
            "PM Agent",
            "\u{1F468}\u{200D}\u{1F4BC}",
            "Breaks down feature ideas into specs and milestones, manages product roadmap",
            &[
                "Feature specification",
                "Roadmap planning",
                "User story creation",
                "Requirements analysis",
            ],
            "Product Strategy, User Experience, Agile Methodology",
        ),
        Agent::seeded(
            "tech",
            "Tech Architect",
            "Technical Architect",
            "\u{1F468}\u{200D}\u{1F4BB}",
            "Suggests tech stack, builds initial design, and provides technical guidance",
            &[
                "Architecture design",
                "Technology recommendations",
                "Technical feasibility analysis",
                "Code structure planning",
            ],
            "Full-stack Development, Cloud Architecture, DevOps",
        ),
        Agent::seeded(
            "market",
            "Market Analyst",
            "Market Analyst",
            "\u{1F4CA}",
            "Scrapes and summarizes competitor strategies, analyzes market opportunities",
            &[
                "Competitive analysis",
                "Market research",
                "Trend identification",
                "Pricing strategy",
            ],
            "Market Research, Business Intelligence, Data Analysis",
        ),
        Agent::seeded(
            "pitch",
            "Pitch Writer",
            "Pitch Writer",
            "\u{270D}\u{FE0F}",
            "Drafts presentations, decks, and compelling content for stakeholders",
            &[
                "Presentation creation",
                "Content writing",
                "Storytelling",
                "Stakeholder communication",
            ],
            "Business Writing, Presentation Design, Communications",
        ),
        Agent::seeded(
            "sprint",
            "Sprint Planner",
            "Sprint Planner",
            "\u{1F4CB}",
            "Allocates tasks over weekly sprints and manages project timelines",
            &[
                "Sprint planning",
                "Task allocation",
                "Timeline management",
                "Progress tracking",
            ],
            "Agile Planning, Project Management, Resource Allocation",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_seeds_five_active_agents() {
        let roster = seed_roster();

        assert_eq!(roster.len(), 5);
        assert!(roster.iter().all(|a| a.active));
    }

    #[test]
    fn roster_ids_are_unique() {
        let roster = seed_roster();
        let mut ids: Vec<&str> = roster.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn roster_order_is_stable() {
        let ids: Vec<String> = seed_roster().into_iter().map(|a| a.id).collect();

        assert_eq!(ids, ["pm", "tech", "market", "pitch", "sprint"]);
    }
}
