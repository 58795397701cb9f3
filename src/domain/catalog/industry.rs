//! Industries, departments and the rules that assemble an industry's
//! department list.

use serde::Serialize;

/// A department dashboard area within an industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Department {
    fn from_def(def: &DepartmentDef) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
        }
    }
}

/// An industry and its ordered departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub color_token: String,
    pub departments: Vec<Department>,
}

impl Industry {
    /// Creates an industry with the department list its id calls for.
    pub fn new(id: &str, name: impl Into<String>, color_token: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
            color_token: color_token.into(),
            departments: build_departments(id),
        }
    }

    pub fn department(&self, department_id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == department_id)
    }
}

struct DepartmentDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

const fn def(id: &'static str, name: &'static str, description: &'static str) -> DepartmentDef {
    DepartmentDef {
        id,
        name,
        description,
    }
}

/// Departments every industry has, in display order.
const UNIVERSAL_DEPARTMENTS: &[DepartmentDef] = &[
    def("accounts", "Accounts & Finance", "Financial reporting, budgeting, and accounts management"),
    def("hr", "Human Resources", "Workforce management, recruitment, and employee analytics"),
    def("sales", "Sales & Marketing", "Revenue tracking, campaigns, and customer acquisition"),
    def("operations", "Operations", "Day-to-day operations and process efficiency"),
    def("it", "IT & Engineering", "Technology infrastructure and development metrics"),
    def("procurement", "Procurement", "Vendor management and purchasing analytics"),
    def("quality", "Quality Assurance", "Quality control and compliance metrics"),
    def("customer-service", "Customer Service", "Support tickets, satisfaction, and response times"),
    def("legal", "Legal & Compliance", "Contract management and regulatory compliance"),
    def("executive", "Executive Summary", "C-suite overview with key business metrics"),
];

const RESEARCH: DepartmentDef = def(
    "research",
    "Research & Development",
    "Innovation pipeline and research metrics",
);

const SUPPLY_CHAIN: DepartmentDef = def(
    "supply-chain",
    "Supply Chain",
    "Supply chain visibility and vendor performance",
);

const RISK: DepartmentDef = def(
    "risk",
    "Risk Management",
    "Risk assessment and mitigation strategies",
);

const RESEARCH_INDUSTRIES: &[&str] = &["manufacturing", "pharma", "saas", "telecom", "energy"];

const SUPPLY_CHAIN_INDUSTRIES: &[&str] = &[
    "manufacturing",
    "retail",
    "ecommerce",
    "logistics",
    "pharma",
    "agriculture",
];

const RISK_INDUSTRIES: &[&str] = &["banking", "insurance", "finance"];

/// The department only a given industry has.
fn core_department(industry_id: &str) -> Option<DepartmentDef> {
    let core = match industry_id {
        "manufacturing" => def("production", "Production & Manufacturing", "Production lines, equipment, and output metrics"),
        "finance" => def("treasury", "Treasury & Investments", "Cash management, investments, and risk analysis"),
        "banking" => def("lending", "Lending & Credit", "Loan portfolio, credit risk, and disbursements"),
        "insurance" => def("underwriting", "Underwriting & Claims", "Policy underwriting and claims processing"),
        "ecommerce" => def("fulfillment", "Fulfillment & Logistics", "Order processing and delivery management"),
        "retail" => def("store-ops", "Store Operations", "Store performance and inventory management"),
        "saas" => def("product", "Product & Engineering", "Product metrics, deployments, and SLA tracking"),
        "marketplace" => def("platform", "Platform & Ecosystem", "Buyer-seller dynamics and marketplace health"),
        "healthcare" => def("clinical", "Clinical Operations", "Patient care, bed management, and clinical outcomes"),
        "pharma" => def("rd", "R&D & Clinical Trials", "Research pipeline and trial progress"),
        "logistics" => def("fleet", "Fleet & Transportation", "Vehicle management and route optimization"),
        "energy" => def("generation", "Power Generation", "Energy production and grid management"),
        "telecom" => def("network", "Network Operations", "Network performance and infrastructure"),
        "hr" => def("talent", "Talent Management", "Recruitment, retention, and workforce planning"),
        "construction" => def("projects", "Project Management", "Construction projects and resource allocation"),
        "education" => def("academics", "Academic Affairs", "Enrollment, courses, and student outcomes"),
        "hospitality" => def("reservations", "Reservations & Revenue", "Booking management and revenue optimization"),
        "agriculture" => def("farming", "Farm Operations", "Crop management and yield analytics"),
        "government" => def("public-services", "Public Services", "Citizen services and municipal operations"),
        _ => return None,
    };
    Some(core)
}

/// Builds the ordered department list of an industry.
///
/// The core department leads, followed by the universal departments.
/// Research is spliced in at index 1, supply chain at index 2 and risk at
/// index 1, in that order, for the industries that carry them.
pub fn build_departments(industry_id: &str) -> Vec<Department> {
    let mut departments: Vec<Department> = core_department(industry_id)
        .iter()
        .chain(UNIVERSAL_DEPARTMENTS.iter())
        .map(Department::from_def)
        .collect();

    let mut splice = |index: usize, dept: &DepartmentDef| {
        let index = index.min(departments.len());
        departments.insert(index, Department::from_def(dept));
    };

    if RESEARCH_INDUSTRIES.contains(&industry_id) {
        splice(1, &RESEARCH);
    }
    if SUPPLY_CHAIN_INDUSTRIES.contains(&industry_id) {
        splice(2, &SUPPLY_CHAIN);
    }
    if RISK_INDUSTRIES.contains(&industry_id) {
        splice(1, &RISK);
    }

    departments
}
