//! The built-in dataset: participants, workflow templates and the demo's
//! private flows, kept as constant tables and materialised on first use.

use crate::capability::Capabilities;
use crate::flow::{FlowRole, FlowStatus, PrivateFlow, RoleStatus};
use crate::participant::{Criticality, Participant};
use crate::workflow::{Stage, Workflow};

struct ParticipantRow {
  id: &'static str,
  name: &'static str,
  role: &'static str,
  capabilities: &'static [&'static str],
  criticality: Criticality,
  holdings: &'static str,
  validator_nodes: u32,
  super_validator: bool,
  description: &'static str,
}

impl ParticipantRow {
  fn to_participant(&self) -> Participant {
    Participant {
      id: self.id.to_string(),
      name: self.name.to_string(),
      role_label: self.role.to_string(),
      capabilities: Capabilities::from_names(self.capabilities.iter().copied()),
      criticality: self.criticality,
      holdings: Some(self.holdings.to_string()),
      validator_nodes: Some(self.validator_nodes),
      super_validator: self.super_validator,
      hosted: false,
      is_user: false,
      description: Some(self.description.to_string()),
    }
  }
}

struct WorkflowRow {
  id: &'static str,
  name: &'static str,
  category: &'static str,
  description: &'static str,
  roles: &'static [&'static str],
  stages: &'static [(&'static str, &'static [&'static str])],
}

impl WorkflowRow {
  fn to_workflow(&self) -> Workflow {
    let stages: Vec<Stage> = self
      .stages
      .iter()
      .map(|(name, roles)| Stage {
        name: name.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
      })
      .collect();

    Workflow {
      id: self.id.to_string(),
      name: self.name.to_string(),
      category: self.category.to_string(),
      description: self.description.to_string(),
      roles: self.roles.iter().map(|r| r.to_string()).collect(),
      stages,
    }
  }
}

const PARTICIPANTS: &[ParticipantRow] = &[
  ParticipantRow {
    id: "p_dtcc",
    name: "DTCC",
    role: "Registry + Issuer",
    capabilities: &["Registry", "Settlement"],
    criticality: Criticality::Critical,
    holdings: "$45.2T",
    validator_nodes: 4,
    super_validator: false,
    description: "The premier post-trade market infrastructure for the global financial services industry.",
  },
  ParticipantRow {
    id: "p_euroclear",
    name: "Euroclear",
    role: "Registry + Collateral",
    capabilities: &["Registry", "Collateral_Agent", "Settlement"],
    criticality: Criticality::Critical,
    holdings: "$37T",
    validator_nodes: 0,
    super_validator: false,
    description: "A global provider of Financial Market Infrastructure (FMI) services.",
  },
  ParticipantRow {
    id: "p_clearstream",
    name: "Clearstream",
    role: "Registry",
    capabilities: &["Registry", "Settlement"],
    criticality: Criticality::Critical,
    holdings: "$16T",
    validator_nodes: 0,
    super_validator: false,
    description: "International central securities depository (ICSD) based in Luxembourg.",
  },
  ParticipantRow {
    id: "p_broadridge",
    name: "Broadridge",
    role: "Collateral",
    capabilities: &["Repo_Platform", "Collateral_Agent"],
    criticality: Criticality::Critical,
    holdings: "$55B",
    validator_nodes: 2,
    super_validator: false,
    description: "Global Fintech leader with DLR (Distributed Ledger Repo) platform on Canton.",
  },
  ParticipantRow {
    id: "p_hkex",
    name: "HKEX Synapse",
    role: "Exchange",
    capabilities: &["Exchange", "Settlement"],
    criticality: Criticality::Required,
    holdings: "$4T",
    validator_nodes: 0,
    super_validator: false,
    description: "Leading global operator of exchanges and clearing houses.",
  },
  ParticipantRow {
    id: "p_nasdaq",
    name: "Nasdaq",
    role: "Exchange + Tech",
    capabilities: &["Exchange", "Registry"],
    criticality: Criticality::Required,
    holdings: "$20T",
    validator_nodes: 0,
    super_validator: false,
    description: "Global technology company serving the capital markets and other industries.",
  },
  ParticipantRow {
    id: "p_gs",
    name: "Goldman Sachs",
    role: "Tokenized Assets",
    capabilities: &["Collateral_Provider", "Issuer", "Cash_Lender"],
    criticality: Criticality::Critical,
    holdings: "$2.5T",
    validator_nodes: 0,
    super_validator: false,
    description: "Operator of GS DAP®, a tokenization platform for digital assets.",
  },
  ParticipantRow {
    id: "p_jpm",
    name: "J.P. Morgan",
    role: "Financing",
    capabilities: &["Collateral_Provider", "Cash_Lender", "Cash_Borrower"],
    criticality: Criticality::Critical,
    holdings: "$3.7T",
    validator_nodes: 0,
    super_validator: false,
    description: "Leading global financial services firm and founding member of Versana.",
  },
  ParticipantRow {
    id: "p_bny",
    name: "BNY",
    role: "Custody",
    capabilities: &["Custody", "Collateral_Agent"],
    criticality: Criticality::Critical,
    holdings: "$44.3T",
    validator_nodes: 0,
    super_validator: false,
    description: "World's largest custodian bank.",
  },
  ParticipantRow {
    id: "p_bofa",
    name: "Bank of America",
    role: "Financing",
    capabilities: &["Cash_Lender", "Collateral_Provider"],
    criticality: Criticality::Critical,
    holdings: "$3.2T",
    validator_nodes: 0,
    super_validator: false,
    description: "multinational investment bank and financial services holding company.",
  },
  ParticipantRow {
    id: "p_sg",
    name: "Société Générale",
    role: "Tokenized Assets",
    capabilities: &["Issuer", "Collateral_Provider"],
    criticality: Criticality::Required,
    holdings: "$1.8T",
    validator_nodes: 2,
    super_validator: false,
    description: "Issued the first digital green bond on a public blockchain.",
  },
  ParticipantRow {
    id: "p_bnp",
    name: "BNP Paribas",
    role: "Tokenized Assets",
    capabilities: &["Issuer", "Custody"],
    criticality: Criticality::Required,
    holdings: "$2.7T",
    validator_nodes: 0,
    super_validator: false,
    description: "European Union's leading bank and key player in international banking.",
  },
  ParticipantRow {
    id: "p_db",
    name: "Deutsche Bank",
    role: "Financing",
    capabilities: &["Cash_Lender", "Custody"],
    criticality: Criticality::Required,
    holdings: "$1.4T",
    validator_nodes: 0,
    super_validator: false,
    description: "Leading German bank connected to Broadridge's DLR solution.",
  },
  ParticipantRow {
    id: "p_citi",
    name: "Citi",
    role: "Financing",
    capabilities: &["Cash_Lender", "Settlement"],
    criticality: Criticality::Required,
    holdings: "$2.4T",
    validator_nodes: 0,
    super_validator: false,
    description: "Active participant in HKEX Synapse and Versana.",
  },
  ParticipantRow {
    id: "p_hsbc",
    name: "HSBC",
    role: "Tokenized Assets",
    capabilities: &["Issuer", "Custody"],
    criticality: Criticality::Required,
    holdings: "$3T",
    validator_nodes: 0,
    super_validator: false,
    description: "Provides HSBC Orion asset tokenization platform.",
  },
  ParticipantRow {
    id: "p_sc",
    name: "Standard Chartered",
    role: "Custody",
    capabilities: &["Custody", "Cash_Lender"],
    criticality: Criticality::Required,
    holdings: "$800B",
    validator_nodes: 0,
    super_validator: false,
    description: "Leading international banking group.",
  },
  ParticipantRow {
    id: "p_drw",
    name: "DRW",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider", "Market_Maker"],
    criticality: Criticality::Critical,
    holdings: "$12B",
    validator_nodes: 0,
    super_validator: false,
    description: "Diversified trading firm innovating across markets.",
  },
  ParticipantRow {
    id: "p_cumberland",
    name: "Cumberland",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider", "Market_Maker"],
    criticality: Criticality::Critical,
    holdings: "$10B",
    validator_nodes: 8,
    super_validator: true,
    description: "Specialized cryptoasset trading unit of DRW.",
  },
  ParticipantRow {
    id: "p_citadel",
    name: "Citadel Securities",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider", "Market_Maker"],
    criticality: Criticality::Critical,
    holdings: "$400B",
    validator_nodes: 1,
    super_validator: false,
    description: "Next-generation capital markets firm.",
  },
  ParticipantRow {
    id: "p_flowtraders",
    name: "Flow Traders",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider"],
    criticality: Criticality::Required,
    holdings: "$500M",
    validator_nodes: 1,
    super_validator: false,
    description: "Global digital liquidity provider.",
  },
  ParticipantRow {
    id: "p_galaxy",
    name: "Galaxy",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider", "Custody"],
    criticality: Criticality::Required,
    holdings: "$3B",
    validator_nodes: 1,
    super_validator: false,
    description: "Digital asset and blockchain leader.",
  },
  ParticipantRow {
    id: "p_gsr",
    name: "GSR",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider"],
    criticality: Criticality::Required,
    holdings: "$1B",
    validator_nodes: 1,
    super_validator: false,
    description: "Global crypto market maker and ecosystem partner.",
  },
  ParticipantRow {
    id: "p_wintermute",
    name: "Wintermute",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider"],
    criticality: Criticality::Required,
    holdings: "$2B",
    validator_nodes: 1,
    super_validator: false,
    description: "Algorithmic liquidity provider for digital assets.",
  },
  ParticipantRow {
    id: "p_b2c2",
    name: "B2C2",
    role: "Liquidity",
    capabilities: &["Liquidity_Provider"],
    criticality: Criticality::Required,
    holdings: "$800M",
    validator_nodes: 1,
    super_validator: false,
    description: "Institutional crypto liquidity provider.",
  },
  ParticipantRow {
    id: "p_falconx",
    name: "FalconX",
    role: "Prime Broker",
    capabilities: &["Collateral_Taker", "Liquidity_Provider"],
    criticality: Criticality::Required,
    holdings: "$1.5B",
    validator_nodes: 1,
    super_validator: false,
    description: "Digital asset prime brokerage.",
  },
  ParticipantRow {
    id: "p_tradeweb",
    name: "Tradeweb",
    role: "Exchange",
    capabilities: &["Exchange"],
    criticality: Criticality::Critical,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Leading builder and operator of electronic marketplaces.",
  },
  ParticipantRow {
    id: "p_copper",
    name: "Copper",
    role: "Custody",
    capabilities: &["Custody", "Collateral_Agent"],
    criticality: Criticality::Critical,
    holdings: "$50B",
    validator_nodes: 1,
    super_validator: false,
    description: "Institutional digital asset custody and settlement.",
  },
  ParticipantRow {
    id: "p_zodia",
    name: "Zodia Custody",
    role: "Custody",
    capabilities: &["Custody"],
    criticality: Criticality::Required,
    holdings: "$2B",
    validator_nodes: 5,
    super_validator: false,
    description: "Institutional crypto custodian by Standard Chartered.",
  },
  ParticipantRow {
    id: "p_bitgo",
    name: "BitGo",
    role: "Custody",
    capabilities: &["Custody", "Wallet"],
    criticality: Criticality::Critical,
    holdings: "$64B",
    validator_nodes: 1,
    super_validator: false,
    description: "Digital asset security and liquidity.",
  },
  ParticipantRow {
    id: "p_anchorage",
    name: "Anchorage Digital",
    role: "Custody",
    capabilities: &["Custody"],
    criticality: Criticality::Required,
    holdings: "$30B",
    validator_nodes: 1,
    super_validator: false,
    description: "First federally chartered digital asset bank.",
  },
  ParticipantRow {
    id: "p_fireblocks",
    name: "Fireblocks",
    role: "Custody Tech",
    capabilities: &["Custody", "Wallet"],
    criticality: Criticality::Required,
    holdings: "$100B+",
    validator_nodes: 0,
    super_validator: false,
    description: "Enterprise platform for building blockchain applications.",
  },
  ParticipantRow {
    id: "p_finoa",
    name: "Finoa",
    role: "Custody",
    capabilities: &["Custody", "Staking"],
    criticality: Criticality::Optional,
    holdings: "$1B",
    validator_nodes: 6,
    super_validator: false,
    description: "Regulated custodian for crypto assets.",
  },
  ParticipantRow {
    id: "p_hex_trust",
    name: "Hex Trust",
    role: "Custody",
    capabilities: &["Custody"],
    criticality: Criticality::Optional,
    holdings: "$5B",
    validator_nodes: 1,
    super_validator: false,
    description: "Institutional digital asset custodian.",
  },
  ParticipantRow {
    id: "p_blackrock",
    name: "BlackRock",
    role: "Asset Manager",
    capabilities: &["Issuer", "Collateral_Provider"],
    criticality: Criticality::Critical,
    holdings: "$10T",
    validator_nodes: 0,
    super_validator: false,
    description: "World's largest asset manager.",
  },
  ParticipantRow {
    id: "p_franklin",
    name: "Franklin Templeton",
    role: "Asset Manager",
    capabilities: &["Issuer", "Collateral_Provider"],
    criticality: Criticality::Required,
    holdings: "$1.5T",
    validator_nodes: 1,
    super_validator: false,
    description: "Global investment management organization.",
  },
  ParticipantRow {
    id: "p_21shares",
    name: "21.co / 21Shares",
    role: "Issuer",
    capabilities: &["Issuer"],
    criticality: Criticality::Optional,
    holdings: "$2B",
    validator_nodes: 1,
    super_validator: false,
    description: "Issuer of crypto ETPs.",
  },
  ParticipantRow {
    id: "p_coinshares",
    name: "CoinShares",
    role: "Issuer",
    capabilities: &["Issuer", "Liquidity_Provider"],
    criticality: Criticality::Optional,
    holdings: "$3B",
    validator_nodes: 1,
    super_validator: false,
    description: "European digital asset investment firm.",
  },
  ParticipantRow {
    id: "p_paxos",
    name: "Paxos",
    role: "Stablecoin Issuer",
    capabilities: &["Issuer", "Settlement"],
    criticality: Criticality::Critical,
    holdings: "$20B",
    validator_nodes: 1,
    super_validator: false,
    description: "Regulated blockchain infrastructure platform.",
  },
  ParticipantRow {
    id: "p_circle",
    name: "Circle",
    role: "Stablecoin Issuer",
    capabilities: &["Issuer", "Settlement"],
    criticality: Criticality::Critical,
    holdings: "$28B",
    validator_nodes: 3,
    super_validator: false,
    description: "Issuer of USDC and EURC.",
  },
  ParticipantRow {
    id: "p_chainlink",
    name: "Chainlink",
    role: "Oracle",
    capabilities: &["Valuation_Pricing"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Decentralized oracle network.",
  },
  ParticipantRow {
    id: "p_pyth",
    name: "Pyth Network",
    role: "Oracle",
    capabilities: &["Valuation_Pricing"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "First-party financial oracle network.",
  },
  ParticipantRow {
    id: "p_coinmetrics",
    name: "Coin Metrics",
    role: "Data",
    capabilities: &["Valuation_Pricing"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Crypto financial intelligence.",
  },
  ParticipantRow {
    id: "p_kaiko",
    name: "Kaiko",
    role: "Data",
    capabilities: &["Valuation_Pricing"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Institutional digital asset data.",
  },
  ParticipantRow {
    id: "p_da",
    name: "Digital Asset",
    role: "Orchestration",
    capabilities: &["Orchestration", "Registry"],
    criticality: Criticality::Critical,
    holdings: "N/A",
    validator_nodes: 32,
    super_validator: true,
    description: "Creators of the Canton Network and Daml.",
  },
  ParticipantRow {
    id: "p_microsoft",
    name: "Microsoft",
    role: "Cloud",
    capabilities: &["Infrastructure"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 0,
    super_validator: false,
    description: "Strategic partner for Canton Network.",
  },
  ParticipantRow {
    id: "p_deloitte",
    name: "Deloitte",
    role: "Audit/Compliance",
    capabilities: &["Legal_Compliance"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 0,
    super_validator: false,
    description: "Professional services network.",
  },
  ParticipantRow {
    id: "p_blockdaemon",
    name: "Blockdaemon",
    role: "Infrastructure",
    capabilities: &["Staking", "Infrastructure"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 3,
    super_validator: false,
    description: "Institutional blockchain infrastructure.",
  },
  ParticipantRow {
    id: "p_figment",
    name: "Figment",
    role: "Infrastructure",
    capabilities: &["Staking"],
    criticality: Criticality::Optional,
    holdings: "N/A",
    validator_nodes: 2,
    super_validator: false,
    description: "Web3 infrastructure provider.",
  },
  ParticipantRow {
    id: "p_equilend",
    name: "EquiLend",
    role: "Securities Finance",
    capabilities: &["Repo_Platform", "Collateral_Agent"],
    criticality: Criticality::Required,
    holdings: "$2.4T",
    validator_nodes: 0,
    super_validator: false,
    description: "Securities lending platform 1Source on Canton.",
  },
  ParticipantRow {
    id: "p_versana",
    name: "Versana",
    role: "Syndicated Loans",
    capabilities: &["Registry", "Settlement"],
    criticality: Criticality::Required,
    holdings: "$900B",
    validator_nodes: 0,
    super_validator: false,
    description: "Industry-backed syndicated loan platform.",
  },
  ParticipantRow {
    id: "p_trm",
    name: "TRM Labs",
    role: "Compliance",
    capabilities: &["Legal_Compliance"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Blockchain intelligence and compliance.",
  },
  ParticipantRow {
    id: "p_elliptic",
    name: "Elliptic",
    role: "Compliance",
    capabilities: &["Legal_Compliance"],
    criticality: Criticality::Required,
    holdings: "N/A",
    validator_nodes: 1,
    super_validator: false,
    description: "Crypto compliance solutions.",
  },
];

const WORKFLOWS: &[WorkflowRow] = &[
  WorkflowRow {
    id: "WF-021",
    name: "Collateral Management",
    category: "Post-Trade / Post-Settlement Services",
    description: "Automate collateral selection, allocation, and mobility across custodians.",
    roles: &[
      "Collateral_Provider",
      "Collateral_Taker",
      "Collateral_Agent",
      "Custody",
      "Valuation_Pricing",
      "Settlement",
      "Registry",
      "Legal_Compliance",
    ],
    stages: &[
      ("Collateral Sourcing", &["Collateral_Provider", "Collateral_Taker"]),
      ("Custody & Valuation", &["Collateral_Agent", "Custody", "Valuation_Pricing"]),
      ("Settlement", &["Settlement", "Registry"]),
      ("Compliance", &["Legal_Compliance"]),
    ],
  },
  WorkflowRow {
    id: "WF-022",
    name: "Repo Processing",
    category: "Post-Trade / Post-Settlement Services",
    description: "Intraday repo swaps with atomic settlement and programmable margins.",
    roles: &[
      "Cash_Lender",
      "Cash_Borrower",
      "Repo_Platform",
      "Custody",
      "Valuation_Pricing",
      "Settlement",
      "Registry",
      "Legal_Compliance",
    ],
    stages: &[
      ("Trade Execution", &["Cash_Lender", "Cash_Borrower", "Repo_Platform"]),
      ("Custody & Valuation", &["Custody", "Valuation_Pricing"]),
      ("Settlement", &["Settlement", "Registry"]),
      ("Compliance", &["Legal_Compliance"]),
    ],
  },
  WorkflowRow {
    id: "WF-035",
    name: "Tokenized Asset Issuance",
    category: "Primary Markets",
    description: "Issue digital bonds or funds with automated lifecycle events.",
    roles: &[
      "Issuer",
      "Registry",
      "Custody",
      "Settlement",
      "Legal_Compliance",
      "Distribution",
    ],
    stages: &[
      ("Issuance", &["Issuer", "Registry"]),
      ("Custody & Settlement", &["Custody", "Settlement"]),
      ("Compliance", &["Legal_Compliance"]),
      ("Distribution", &["Distribution"]),
    ],
  },
];

/// (id, name, requirements, status, filled_by, reward_share)
type FlowRoleRow = (
  &'static str,
  &'static str,
  &'static str,
  RoleStatus,
  Option<&'static str>,
  u32,
);

struct FlowRow {
  id: &'static str,
  name: &'static str,
  description: &'static str,
  status: FlowStatus,
  created_at: &'static str,
  roles: &'static [FlowRoleRow],
}

impl FlowRow {
  fn to_flow(&self) -> PrivateFlow {
    PrivateFlow {
      id: self.id.to_string(),
      name: self.name.to_string(),
      description: self.description.to_string(),
      status: self.status,
      created_at: self.created_at.to_string(),
      roles: self
        .roles
        .iter()
        .map(|(id, name, requirements, status, filled_by, share)| FlowRole {
          id: id.to_string(),
          name: name.to_string(),
          requirements: requirements.to_string(),
          status: *status,
          filled_by: filled_by.map(str::to_string),
          reward_share: Some(*share),
        })
        .collect(),
    }
  }
}

const PRIVATE_FLOWS: &[FlowRow] = &[
  FlowRow {
    id: "flow-dat-tokenization",
    name: "Flow_DAT_Tokenization",
    description: "Tokenize equity on Canton with crypto basket redemption feature.",
    status: FlowStatus::Draft,
    created_at: "2026-01-29",
    roles: &[
      ("r1", "Issuer", "Treasury Client", RoleStatus::Known, Some("Treasury Co."), 15),
      ("r2", "Broker-Dealer", "Texture Capital", RoleStatus::Filled, Some("Texture"), 25),
      ("r3", "Transfer Agent", "Texture Capital", RoleStatus::Filled, Some("Texture"), 10),
      ("r4", "ATS Operator", "Texture Capital", RoleStatus::Filled, Some("Texture"), 10),
      ("r5", "Crypto Custodian", "Multi-coin custody (80+ PoS tokens)", RoleStatus::Gap, None, 15),
      ("r6", "Price Oracle", "Real-time PoS pricing", RoleStatus::Gap, None, 5),
      ("r7", "Compliance Provider", "KYC/AML for Canton", RoleStatus::Gap, None, 10),
    ],
  },
  FlowRow {
    id: "flow-mmf-trading",
    name: "Flow_MMF_Trading",
    description: "Money Market Fund trading and settlement on-chain.",
    status: FlowStatus::Draft,
    created_at: "2026-01-26",
    roles: &[
      ("m1", "Fund Manager", "Asset Manager", RoleStatus::Known, Some("Franklin"), 20),
      ("m2", "Custodian", "Global Custodian", RoleStatus::Filled, Some("BNY"), 15),
      ("m3", "Transfer Agent", "Digital TA", RoleStatus::Gap, None, 10),
      ("m4", "Distributor", "Institutional Dealer", RoleStatus::Gap, None, 25),
      ("m5", "Compliance", "Global KYC", RoleStatus::Gap, None, 10),
    ],
  },
];

pub(crate) fn participants() -> Vec<Participant> {
  PARTICIPANTS.iter().map(ParticipantRow::to_participant).collect()
}

pub(crate) fn workflows() -> Vec<Workflow> {
  WORKFLOWS.iter().map(WorkflowRow::to_workflow).collect()
}

pub(crate) fn private_flows() -> Vec<PrivateFlow> {
  PRIVATE_FLOWS.iter().map(FlowRow::to_flow).collect()
}
