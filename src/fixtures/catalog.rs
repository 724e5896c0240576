use crate::catalog::{Category, FieldDefinition, FieldType, ObjectDefinition, WorkflowStep};
use crate::icons::Icon;
use crate::tone::Tone;

fn field(name: &str, field_type: FieldType, required: bool) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        field_type,
        required,
    }
}

fn step(name: &str, color: Tone) -> WorkflowStep {
    WorkflowStep {
        name: name.to_string(),
        color,
    }
}

#[allow(clippy::too_many_arguments)]
fn definition(
    id: &str,
    name: &str,
    icon: Icon,
    icon_bg: &str,
    icon_color: &str,
    category: Category,
    description: &str,
    fields: Vec<FieldDefinition>,
    workflow: Vec<WorkflowStep>,
) -> ObjectDefinition {
    ObjectDefinition {
        id: id.to_string(),
        name: name.to_string(),
        icon,
        icon_bg: icon_bg.to_string(),
        icon_color: icon_color.to_string(),
        category,
        description: description.to_string(),
        fields,
        workflow,
    }
}

/// Object types offered by the Object Manager.
pub fn object_definitions() -> Vec<ObjectDefinition> {
    use FieldType::*;

    vec![
        definition(
            "project",
            "Project",
            Icon::Briefcase,
            "#DBEAFE",
            "#2563EB",
            Category::Object,
            "Client engagements from kickoff to handover",
            vec![
                field("Project Name", Text, true),
                field("Customer", Relation, true),
                field("Start Date", Date, true),
                field("Budget", Currency, false),
                field("Project Manager", Relation, false),
                field("Phase", Select, false),
            ],
            vec![
                step("KICK OFF", Tone::Blue),
                step("IN PROGRESS", Tone::Orange),
                step("COMPLETED", Tone::Green),
            ],
        ),
        definition(
            "task",
            "Task",
            Icon::ClipboardList,
            "#EDE9FE",
            "#7C3AED",
            Category::SubObject,
            "A unit of work inside a project",
            vec![
                field("Title", Text, true),
                field("Assignee", Relation, false),
                field("Due Date", Date, false),
                field("Estimate (h)", Number, false),
            ],
            vec![
                step("TO DO", Tone::Slate),
                step("DOING", Tone::Blue),
                step("DONE", Tone::Green),
            ],
        ),
        definition(
            "customer",
            "Customer",
            Icon::Users,
            "#D1FAE5",
            "#059669",
            Category::Object,
            "Companies and people you sell to",
            vec![
                field("Company", Text, true),
                field("Email", Email, false),
                field("Phone", Phone, false),
                field("Website", Url, false),
                field("Segment", Select, false),
            ],
            vec![
                step("LEAD", Tone::Slate),
                step("ACTIVE", Tone::Green),
                step("CHURNED", Tone::Red),
            ],
        ),
        definition(
            "deal",
            "Deal",
            Icon::Handshake,
            "#FEF3C7",
            "#D97706",
            Category::Object,
            "Sales opportunities tracked through the pipeline",
            vec![
                field("Deal Name", Text, true),
                field("Customer", Relation, true),
                field("Value", Currency, true),
                field("Close Date", Date, false),
                field("Probability", Number, false),
            ],
            vec![
                step("QUALIFY", Tone::Blue),
                step("PROPOSAL", Tone::Purple),
                step("WON", Tone::Green),
                step("LOST", Tone::Red),
            ],
        ),
        definition(
            "contact",
            "Contact",
            Icon::Contact,
            "#E0F2FE",
            "#0284C7",
            Category::SubObject,
            "A person attached to a customer or supplier",
            vec![
                field("Full Name", Text, true),
                field("Email", Email, false),
                field("Phone", Phone, false),
            ],
            Vec::new(),
        ),
        definition(
            "invoice",
            "Invoice",
            Icon::Receipt,
            "#FCE7F3",
            "#DB2777",
            Category::Object,
            "Bills issued to customers",
            vec![
                field("Invoice No.", Text, true),
                field("Customer", Relation, true),
                field("Amount", Currency, true),
                field("Issue Date", Date, true),
                field("Due Date", Date, false),
            ],
            vec![
                step("DRAFT", Tone::Slate),
                step("SENT", Tone::Blue),
                step("PAID", Tone::Green),
                step("OVERDUE", Tone::Red),
            ],
        ),
        definition(
            "campaign",
            "Campaign",
            Icon::Megaphone,
            "#FCE7F3",
            "#EC4899",
            Category::Object,
            "Marketing pushes across channels",
            vec![
                field("Campaign Name", Text, true),
                field("Channel", Select, false),
                field("Spend", Currency, false),
                field("Landing Page", Url, false),
            ],
            vec![
                step("IDEA", Tone::Slate),
                step("PREPARE", Tone::Blue),
                step("ACTIVE", Tone::Green),
                step("OFF", Tone::Red),
            ],
        ),
        definition(
            "milestone",
            "Milestone",
            Icon::Target,
            "#FFEDD5",
            "#EA580C",
            Category::SubObject,
            "Checkpoint dates within a project",
            vec![field("Name", Text, true), field("Target Date", Date, true)],
            vec![step("PLANNED", Tone::Blue), step("REACHED", Tone::Green)],
        ),
        definition(
            "purchase-order",
            "Purchase Order",
            Icon::ShoppingCart,
            "#FFEDD5",
            "#F97316",
            Category::Object,
            "Orders placed with suppliers",
            vec![
                field("PO Number", Text, true),
                field("Supplier", Relation, true),
                field("Total", Currency, true),
                field("Delivery Date", Date, false),
            ],
            vec![
                step("REQUESTED", Tone::Slate),
                step("APPROVED", Tone::Blue),
                step("RECEIVED", Tone::Green),
            ],
        ),
        definition(
            "site-visit",
            "Site Visit",
            Icon::MapPin,
            "#CCFBF1",
            "#0D9488",
            Category::SubObject,
            "On-site inspections and measurements",
            vec![
                field("Location", Text, true),
                field("Visit Date", Date, true),
                field("Inspector", Relation, false),
                field("Notes", Text, false),
            ],
            vec![step("SCHEDULED", Tone::Blue), step("DONE", Tone::Green)],
        ),
    ]
}
