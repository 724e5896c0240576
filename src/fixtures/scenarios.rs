use crate::icons::Icon;
use crate::model::{
    ActiveSpace, ChatMessage, ChatThread, CustomField, FunctionId, ObjectId, Priority, Scenario,
    ScenarioFunction, ScenarioMeta, ScenarioObject, ViewTypeHint,
};

fn object(
    id: &str,
    title: &str,
    status: &str,
    priority: Priority,
    assignee: &str,
    custom_fields: Vec<CustomField>,
) -> ScenarioObject {
    ScenarioObject {
        id: ObjectId::new(id),
        title: title.to_string(),
        status: status.to_string(),
        priority,
        assignee: assignee.to_string(),
        assignee_avatar: None,
        object_type: None,
        icon: None,
        date: None,
        custom_fields,
    }
}

fn function(
    id: &str,
    name: &str,
    icon: Icon,
    view_type: ViewTypeHint,
    objects: Vec<ScenarioObject>,
) -> ScenarioFunction {
    ScenarioFunction {
        id: FunctionId::new(id),
        name: name.to_string(),
        icon,
        view_type,
        objects,
    }
}

fn message(user: &str, text: &str, timestamp: &str, avatar: u8) -> ChatMessage {
    ChatMessage {
        user: user.to_string(),
        text: text.to_string(),
        timestamp: Some(timestamp.to_string()),
        avatar_index: Some(avatar),
    }
}

fn thread(object_id: &str, messages: Vec<ChatMessage>) -> ChatThread {
    ChatThread {
        related_object_id: ObjectId::new(object_id),
        messages,
    }
}

fn scenario(
    industry: &str,
    company_name: &str,
    space: &str,
    functions: Vec<ScenarioFunction>,
    unified_chat: Vec<ChatThread>,
) -> Scenario {
    Scenario {
        meta: ScenarioMeta {
            industry: industry.to_string(),
            company_name: company_name.to_string(),
        },
        active_space: ActiveSpace {
            name: space.to_string(),
            functions,
        },
        unified_chat,
    }
}

pub fn construction() -> Scenario {
    use CustomField as F;

    let material_tracking = function(
        "func_1",
        "Material Tracking",
        Icon::Package,
        ViewTypeHint::Kanban,
        vec![
            object(
                "obj_1",
                "Steel Beams - Tower A",
                "In Transit",
                Priority::High,
                "Mike Chen",
                vec![
                    F::text("Quantity", "500 units"),
                    F::text("ETA", "Tomorrow 9AM"),
                    F::text("Supplier", "SteelCorp Inc."),
                ],
            ),
            object(
                "obj_2",
                "Concrete Mix - Foundation",
                "Delivered",
                Priority::Medium,
                "Sarah Johnson",
                vec![
                    F::text("Quantity", "50 tons"),
                    F::text("Location", "Site B"),
                    F::text("Quality", "Grade A"),
                ],
            ),
            object(
                "obj_3",
                "Glass Panels - Facade",
                "Ordered",
                Priority::Low,
                "Tom Wilson",
                vec![
                    F::text("Quantity", "200 panels"),
                    F::text("ETA", "Next Week"),
                    F::text("Supplier", "GlassTech"),
                ],
            ),
            object(
                "obj_4",
                "Electrical Wiring - Floor 3",
                "Delayed",
                Priority::Critical,
                "Lisa Park",
                vec![
                    F::text("Quantity", "10km"),
                    F::text("Delay", "3 days"),
                    F::text("Reason", "Customs hold"),
                ],
            ),
        ],
    );

    let site_inspections = function(
        "func_2",
        "Site Inspections",
        Icon::ClipboardCheck,
        ViewTypeHint::Table,
        vec![
            object(
                "obj_5",
                "Safety Audit - Tower A",
                "Scheduled",
                Priority::High,
                "Inspector Davis",
                vec![
                    F::text("Date", "Jan 20, 2026"),
                    F::text("Type", "OSHA Compliance"),
                ],
            ),
            object(
                "obj_6",
                "Structural Review - Foundation",
                "Completed",
                Priority::Critical,
                "Engineer Martinez",
                vec![
                    F::text("Result", "Passed"),
                    F::text("Notes", "Minor adjustments needed"),
                ],
            ),
        ],
    );

    scenario(
        "Construction",
        "BuildRight Co.",
        "PROJECT OPS",
        vec![material_tracking, site_inspections],
        vec![
            thread(
                "obj_1",
                vec![
                    message(
                        "Mike Chen",
                        "@Sarah, Steel delivery truck is 30 mins out. Can you confirm crane availability?",
                        "9:30 AM",
                        1,
                    ),
                    message(
                        "Sarah",
                        "@Mike got it. Crane team is ready and waiting at Bay 3.",
                        "9:32 AM",
                        3,
                    ),
                    message(
                        "Mike Chen",
                        "@Sarah Perfect. I'll update the status once unloaded.",
                        "9:35 AM",
                        1,
                    ),
                ],
            ),
            thread(
                "obj_4",
                vec![
                    message(
                        "Lisa Park",
                        "@Team Customs just cleared the wiring shipment!",
                        "2:15 PM",
                        4,
                    ),
                    message(
                        "David",
                        "@Lisa Great news! Rerouting to Site B now. ETA 4pm.",
                        "2:18 PM",
                        0,
                    ),
                    message(
                        "Lisa Park",
                        "@David thanks for the quick turnaround.",
                        "2:20 PM",
                        4,
                    ),
                ],
            ),
        ],
    )
}

pub fn marketing() -> Scenario {
    use CustomField as F;

    let campaigns = function(
        "func_1",
        "Active Campaigns",
        Icon::Target,
        ViewTypeHint::Kanban,
        vec![
            object(
                "obj_1",
                "Q1 Product Launch",
                "In Progress",
                Priority::High,
                "Emma Davis",
                vec![
                    F::money("Budget", "$50,000"),
                    F::text("Platform", "Multi-channel"),
                    F::text("Leads", "1,250"),
                ],
            ),
            object(
                "obj_2",
                "Brand Awareness Push",
                "Planning",
                Priority::Medium,
                "James Wilson",
                vec![
                    F::money("Budget", "$25,000"),
                    F::text("Platform", "Social"),
                    F::text("Target", "Gen Z"),
                ],
            ),
            object(
                "obj_3",
                "Holiday Sale Promo",
                "Completed",
                Priority::High,
                "Sofia Chen",
                vec![
                    F::percent("ROI", "320%"),
                    F::text("Conversions", "8,500"),
                    F::money("Revenue", "$425K"),
                ],
            ),
            object(
                "obj_4",
                "Influencer Partnership",
                "Review",
                Priority::Low,
                "Alex Turner",
                vec![
                    F::text("Influencers", "12"),
                    F::text("Reach", "2.5M"),
                    F::percent("Engagement", "8.2%"),
                ],
            ),
        ],
    );

    let content_calendar = function(
        "func_2",
        "Content Calendar",
        Icon::Calendar,
        ViewTypeHint::Table,
        vec![
            object(
                "obj_5",
                "Blog Post: Industry Trends",
                "Draft",
                Priority::Medium,
                "Content Team",
                vec![
                    F::text("Due", "Jan 18"),
                    F::text("Words", "2,000"),
                    F::text("SEO", "Optimized"),
                ],
            ),
            object(
                "obj_6",
                "Video: Product Demo",
                "Filming",
                Priority::High,
                "Video Team",
                vec![
                    F::text("Length", "5 min"),
                    F::text("Format", "4K"),
                    F::text("Platform", "YouTube"),
                ],
            ),
        ],
    );

    scenario(
        "Marketing Agency",
        "CreativeFlow Inc.",
        "CAMPAIGNS",
        vec![campaigns, content_calendar],
        vec![thread(
            "obj_1",
            vec![
                message(
                    "Emma Davis",
                    "@Kevin Creative assets are ready for review. Can you take a look?",
                    "10:00 AM",
                    0,
                ),
                message("Kevin", "@Emma Looks fine to me, go ahead.", "10:05 AM", 2),
                message(
                    "Emma Davis",
                    "@Team Sounds good. I'll prepare the final deck for 2pm.",
                    "10:08 AM",
                    0,
                ),
            ],
        )],
    )
}

pub fn logistics() -> Scenario {
    use CustomField as F;

    let shipments = function(
        "func_1",
        "Shipment Tracking",
        Icon::Truck,
        ViewTypeHint::Kanban,
        vec![
            object(
                "obj_1",
                "Delivery to Amazon WH",
                "Delayed",
                Priority::High,
                "Driver Mike",
                vec![
                    F::text("Weight", "500kg"),
                    F::text("ETA", "2 hours late"),
                    F::text("Route", "I-95 North"),
                ],
            ),
            object(
                "obj_2",
                "Pickup from Port Newark",
                "In Transit",
                Priority::Medium,
                "Driver Sarah",
                vec![
                    F::text("Containers", "3"),
                    F::text("ETA", "On schedule"),
                    F::customer("Client", "GlobalTech"),
                ],
            ),
            object(
                "obj_3",
                "Express Delivery - Medical",
                "Completed",
                Priority::Critical,
                "Driver Tom",
                vec![
                    F::text("Type", "Temperature Controlled"),
                    F::text("Delivered", "8:45 AM"),
                ],
            ),
            object(
                "obj_4",
                "Warehouse Transfer",
                "Pending",
                Priority::Low,
                "Unassigned",
                vec![
                    F::text("From", "WH-A"),
                    F::text("To", "WH-C"),
                    F::text("Pallets", "45"),
                ],
            ),
        ],
    );

    let maintenance = function(
        "func_2",
        "Fleet Maintenance",
        Icon::Wrench,
        ViewTypeHint::Table,
        vec![object(
            "obj_5",
            "Truck #12 - Oil Change",
            "Scheduled",
            Priority::Medium,
            "Mechanic Joe",
            vec![
                F::text("Date", "Jan 22"),
                F::text("Mileage", "45,000 mi"),
            ],
        )],
    );

    scenario(
        "Logistics",
        "FastTrack Inc.",
        "FLEET OPS",
        vec![shipments, maintenance],
        vec![thread(
            "obj_1",
            vec![
                message(
                    "Driver Mike",
                    "@Dispatch Traffic on I-95. Gonna be late.",
                    "11:30 AM",
                    2,
                ),
                message(
                    "Dispatcher",
                    "@Mike Logged. I'll update the client immediately.",
                    "11:32 AM",
                    1,
                ),
                message(
                    "Driver Mike",
                    "@Dispatcher Looks like 2 hour delay minimum. Sorry about this.",
                    "11:45 AM",
                    2,
                ),
            ],
        )],
    )
}
