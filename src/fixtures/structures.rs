use crate::classify::Industry;
use crate::icons::Icon;
use crate::structure::{Area, BusinessStructure, FunctionBlock, ObjectItem, Space};

fn primary(name: &str, icon: Icon) -> ObjectItem {
    ObjectItem::new(name, icon, true)
}

fn child(name: &str, icon: Icon) -> ObjectItem {
    ObjectItem::new(name, icon, false)
}

fn function(name: &str, label: &str, primary_color: &str, objects: Vec<ObjectItem>) -> FunctionBlock {
    FunctionBlock {
        name: name.to_string(),
        label: label.to_string(),
        primary_color: primary_color.to_string(),
        objects,
    }
}

fn space(name: &str, color: &str, icon: Icon, functions: Vec<FunctionBlock>) -> Space {
    Space {
        name: name.to_string(),
        color: color.to_string(),
        icon,
        functions,
    }
}

fn area(name: &str, spaces: Vec<Space>) -> Area {
    Area {
        name: name.to_string(),
        spaces,
    }
}

fn marketing_campaigns(with_webform: bool) -> FunctionBlock {
    let mut objects = vec![
        primary("Campaign", Icon::Megaphone),
        child("Ad", Icon::Image),
        child("Event", Icon::Calendar),
        child("Partnership", Icon::Handshake),
    ];
    if with_webform {
        objects.push(child("Webform", Icon::FormInput));
    }
    function("Marketing Campaigns", "Marketing Campaigns", "#3B82F6", objects)
}

fn content_production() -> FunctionBlock {
    function(
        "Content Production",
        "Content",
        "#3B82F6",
        vec![
            primary("Content", Icon::FileText),
            child("Video", Icon::Film),
            child("Graphic", Icon::PenTool),
        ],
    )
}

fn office_intranet() -> FunctionBlock {
    function(
        "Office Intranet",
        "Intranet",
        "#8B5CF6",
        vec![
            primary("Announcement", Icon::MessageSquare),
            child("Kudos", Icon::Award),
            child("Sharing", Icon::Share2),
            child("Internal Event", Icon::PartyPopper),
            child("Hangouts", Icon::Coffee),
        ],
    )
}

fn sales_crm() -> FunctionBlock {
    function(
        "Sales & CRM",
        "CRM",
        "#10B981",
        vec![
            primary("Customer", Icon::Users),
            child("Meeting", Icon::Calendar),
            child("Deal", Icon::Briefcase),
            child("Proposal", Icon::FileText),
            child("Quotes", Icon::Receipt),
        ],
    )
}

fn asset_management(color: &str) -> FunctionBlock {
    function(
        "Asset Management",
        "Asset Management",
        color,
        vec![
            primary("Asset", Icon::Database),
            child("Allocation History", Icon::History),
            child("Repair Log", Icon::Wrench),
        ],
    )
}

fn contract_and_invoice(color: &str) -> FunctionBlock {
    function(
        "Contract & Invoice",
        "Contract & Invoice",
        color,
        vec![
            primary("Contract", Icon::FileSignature),
            child("Invoice", Icon::Receipt),
            child("Receipt", Icon::FileCheck),
        ],
    )
}

/// Interior design studio used by the Overview screen.
pub fn sample_business_structure() -> BusinessStructure {
    BusinessStructure {
        company_name: "Laika Design Studio".to_string(),
        industry: "Interior Design & Architecture".to_string(),
        areas: vec![
            area(
                "COMMERCIAL OPERATIONS",
                vec![
                    space(
                        "MARKETING",
                        "#EC4899",
                        Icon::Megaphone,
                        vec![marketing_campaigns(true), content_production()],
                    ),
                    space(
                        "PROCUREMENT",
                        "#F97316",
                        Icon::ShoppingCart,
                        vec![function(
                            "Supplier & Purchasing",
                            "Suppliers & Purchases",
                            "#10B981",
                            vec![
                                primary("Supplier", Icon::Building),
                                child("Contact", Icon::Contact),
                                child("Purchase Order", Icon::Receipt),
                                child("Item Category", Icon::Package),
                            ],
                        )],
                    ),
                ],
            ),
            area(
                "OFFICE OPERATIONS",
                vec![
                    space("OFFICE OPERATION", "#8B5CF6", Icon::Share2, vec![office_intranet()]),
                    space(
                        "SALES & GROWTH",
                        "#10B981",
                        Icon::CircleDollarSign,
                        vec![sales_crm(), asset_management("#10B981")],
                    ),
                ],
            ),
            area(
                "PEOPLE & FINANCE",
                vec![
                    space(
                        "HUMAN RESOURCES",
                        "#F43F5E",
                        Icon::Users,
                        vec![function(
                            "Human Resources",
                            "HRM",
                            "#F43F5E",
                            vec![
                                primary("Employee Profile", Icon::UserCircle),
                                child("Contract", Icon::FileSignature),
                                child("Salary Decision", Icon::DollarSign),
                                child("HR Incident", Icon::AlertCircle),
                                child("Onboarding", Icon::UserPlus),
                                child("Offboarding", Icon::UserMinus),
                            ],
                        )],
                    ),
                    space(
                        "ACCOUNTING",
                        "#F59E0B",
                        Icon::CircleDollarSign,
                        vec![contract_and_invoice("#F59E0B")],
                    ),
                ],
            ),
            area(
                "PROJECT DELIVERY",
                vec![space(
                    "PRODUCT DELIVERY",
                    "#3B82F6",
                    Icon::Layers,
                    vec![
                        function(
                            "Design",
                            "Interior Design",
                            "#3B82F6",
                            vec![
                                primary("Design", Icon::Palette),
                                child("Floor Plan", Icon::LayoutGrid),
                                child("Concept", Icon::Lightbulb),
                                child("3D", Icon::Box),
                                child("2D", Icon::Monitor),
                            ],
                        ),
                        function(
                            "Project Execution",
                            "Execution",
                            "#3B82F6",
                            vec![
                                primary("Project", Icon::Briefcase),
                                child("Task", Icon::ClipboardList),
                                child("Milestone", Icon::Target),
                                child("Site Visit", Icon::MapPin),
                            ],
                        ),
                    ],
                )],
            ),
        ],
    }
}

/// Generic SaaS company, an alternate Overview tree.
pub fn tech_saas_structure() -> BusinessStructure {
    BusinessStructure {
        company_name: "TechFlow Inc".to_string(),
        industry: "SaaS Technology".to_string(),
        areas: vec![
            area(
                "GROWTH",
                vec![
                    space(
                        "MARKETING",
                        "#EC4899",
                        Icon::Megaphone,
                        vec![function(
                            "Digital Marketing",
                            "Digital Campaigns",
                            "#EC4899",
                            vec![
                                primary("Campaign", Icon::Megaphone),
                                child("Landing Page", Icon::Monitor),
                                child("A/B Test", Icon::Target),
                                child("Analytics Report", Icon::BarChart3),
                            ],
                        )],
                    ),
                    space(
                        "SALES",
                        "#10B981",
                        Icon::TrendingUp,
                        vec![function(
                            "Pipeline",
                            "Sales Pipeline",
                            "#10B981",
                            vec![
                                primary("Lead", Icon::UserPlus),
                                child("Opportunity", Icon::Target),
                                child("Demo", Icon::Video),
                                child("Contract", Icon::FileSignature),
                            ],
                        )],
                    ),
                ],
            ),
            area(
                "PRODUCT",
                vec![
                    space(
                        "ENGINEERING",
                        "#3B82F6",
                        Icon::Cpu,
                        vec![function(
                            "Development",
                            "Product Development",
                            "#3B82F6",
                            vec![
                                primary("Feature", Icon::Zap),
                                child("Bug", Icon::AlertCircle),
                                child("Sprint", Icon::Clock),
                                child("Release", Icon::Rocket),
                            ],
                        )],
                    ),
                    space(
                        "SUPPORT",
                        "#8B5CF6",
                        Icon::Headphones,
                        vec![function(
                            "Customer Support",
                            "Support",
                            "#8B5CF6",
                            vec![
                                primary("Ticket", Icon::TicketCheck),
                                child("Knowledge Base", Icon::BookOpen),
                                child("Feedback", Icon::MessageSquare),
                            ],
                        )],
                    ),
                ],
            ),
        ],
    }
}

fn construction_spaces() -> Vec<Space> {
    vec![
        space(
            "PROJECT MANAGEMENT",
            "#3B82F6",
            Icon::HardHat,
            vec![
                function(
                    "Site Operations",
                    "Site Management",
                    "#3B82F6",
                    vec![
                        primary("Project", Icon::Building),
                        child("Work Order", Icon::ClipboardList),
                        child("Site Report", Icon::FileText),
                        child("Inspection", Icon::CheckCircle),
                    ],
                ),
                function(
                    "Resource Planning",
                    "Resources",
                    "#3B82F6",
                    vec![
                        primary("Equipment", Icon::Wrench),
                        child("Schedule", Icon::Calendar),
                        child("Crew Assignment", Icon::Users),
                    ],
                ),
            ],
        ),
        space(
            "PROCUREMENT",
            "#F97316",
            Icon::ShoppingCart,
            vec![
                function(
                    "Supplier & Purchasing",
                    "Suppliers & Purchases",
                    "#10B981",
                    vec![
                        primary("Supplier", Icon::Building),
                        child("Contact", Icon::Contact),
                        child("Purchase Order", Icon::Receipt),
                    ],
                ),
                function(
                    "Materials",
                    "Material Tracking",
                    "#10B981",
                    vec![
                        primary("Material", Icon::Package),
                        child("Delivery", Icon::Truck),
                        child("Inventory", Icon::Warehouse),
                    ],
                ),
            ],
        ),
        space(
            "SAFETY & COMPLIANCE",
            "#EF4444",
            Icon::AlertCircle,
            vec![function(
                "Safety Management",
                "Safety",
                "#EF4444",
                vec![
                    primary("Safety Report", Icon::FileCheck),
                    child("Incident", Icon::AlertCircle),
                    child("Training", Icon::Award),
                    child("Certification", Icon::FileSignature),
                ],
            )],
        ),
    ]
}

fn marketing_spaces() -> Vec<Space> {
    vec![
        space(
            "MARKETING",
            "#EC4899",
            Icon::Megaphone,
            vec![marketing_campaigns(false), content_production()],
        ),
        space("OFFICE OPERATION", "#8B5CF6", Icon::Share2, vec![office_intranet()]),
        space(
            "SALES & GROWTH",
            "#10B981",
            Icon::CircleDollarSign,
            vec![sales_crm()],
        ),
        space(
            "HUMAN RESOURCES",
            "#F43F5E",
            Icon::Users,
            vec![function(
                "Human Resources",
                "HRM",
                "#F43F5E",
                vec![
                    primary("Employee Profile", Icon::UserCircle),
                    child("Contract", Icon::FileSignature),
                    child("Salary Decision", Icon::DollarSign),
                    child("HR Incident", Icon::AlertCircle),
                ],
            )],
        ),
    ]
}

fn logistics_spaces() -> Vec<Space> {
    vec![
        space(
            "FLEET OPERATIONS",
            "#3B82F6",
            Icon::Truck,
            vec![
                function(
                    "Shipment Tracking",
                    "Shipments",
                    "#3B82F6",
                    vec![
                        primary("Shipment", Icon::Package),
                        child("Route", Icon::MapPin),
                        child("Vehicle", Icon::Truck),
                        child("Driver", Icon::UserCircle),
                    ],
                ),
                function(
                    "Warehouse Ops",
                    "Warehouse",
                    "#3B82F6",
                    vec![
                        primary("Warehouse", Icon::Warehouse),
                        child("Inventory", Icon::Package),
                        child("Pick List", Icon::ClipboardList),
                    ],
                ),
            ],
        ),
        space(
            "CLIENT SERVICES",
            "#10B981",
            Icon::Users,
            vec![function(
                "Customer Management",
                "Customers",
                "#10B981",
                vec![
                    primary("Client", Icon::Building),
                    child("Order", Icon::ClipboardList),
                    child("Invoice", Icon::Receipt),
                    child("Support Ticket", Icon::MessageSquare),
                ],
            )],
        ),
        space(
            "ACCOUNTING",
            "#F59E0B",
            Icon::CircleDollarSign,
            vec![contract_and_invoice("#8B5CF6"), asset_management("#8B5CF6")],
        ),
    ]
}

/// Spaces shown by the Structure view for an industry.
pub fn industry_spaces(industry: Industry) -> Vec<Space> {
    match industry {
        Industry::Construction => construction_spaces(),
        Industry::Marketing => marketing_spaces(),
        Industry::Logistics => logistics_spaces(),
    }
}

/// Resolves the Structure-view spaces from a scenario's industry label, falling
/// back to the logistics layout when the label is not recognised.
pub fn structure_for_industry(industry_label: &str) -> Vec<Space> {
    industry_spaces(Industry::from_meta(industry_label).unwrap_or(Industry::DEFAULT))
}
