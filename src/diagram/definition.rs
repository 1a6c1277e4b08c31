use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// The instruction kind of a single block in a thread diagram.
///
/// Unknown kinds on the wire decode as `Operation`, which neither the code
/// generator nor the simulator gives any effect beyond advancing control flow.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    #[serde(alias = "Start")]
    Start,
    #[serde(alias = "End")]
    End,
    /// `left = right` over two shared variables.
    #[serde(alias = "Assignment")]
    Assignment,
    /// `variable = constant`.
    #[serde(alias = "ConstantAssignment")]
    ConstantAssignment,
    /// Read an integer from the input stream into `variable`.
    #[serde(alias = "Read")]
    Read,
    /// Emit the current value of `variable` to the output stream.
    #[serde(alias = "Write")]
    Write,
    /// Branch on `variable <op> constant`.
    #[serde(alias = "Condition")]
    Condition,
    /// Generic placeholder operation. Also the fallback for unknown kinds.
    #[serde(other)]
    Operation,
}

/// The label of a directed connection between two blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionKind {
    #[serde(alias = "True")]
    True,
    #[serde(alias = "False")]
    False,
    #[default]
    #[serde(other)]
    Normal,
}

/// One instruction node in a thread diagram.
///
/// Kind-specific details live in the string-keyed `data` map
/// (`leftVariable`/`rightVariable` for assignments, `variable`, `constant`
/// and `operator` for the other kinds). Missing or malformed entries make the
/// block a no-op rather than an error.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub data: AHashMap<String, String>,
}

impl Block {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
            data: AHashMap::new(),
        }
    }

    /// Looks up a data property by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Looks up a data property and parses it as an integer.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key)?.trim().parse().ok()
    }
}

/// A directed, labeled connection between two blocks of one diagram.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Connection {
    pub id: String,
    #[serde(rename = "source")]
    pub source_id: String,
    #[serde(rename = "target")]
    pub target_id: String,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
}

impl Connection {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: ConnectionKind,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
        }
    }
}

/// One thread's flowchart: blocks plus the connections between them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Diagram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "nodes", default)]
    pub blocks: Vec<Block>,
    #[serde(rename = "edges", default)]
    pub connections: Vec<Connection>,
}

impl Diagram {
    /// Resolves the entry block: the unique block with no incoming connection,
    /// falling back to the first block, then to the `"start"` sentinel.
    pub fn entry_block_id(&self) -> String {
        let with_incoming: AHashSet<&str> = self
            .connections
            .iter()
            .map(|c| c.target_id.as_str())
            .collect();
        self.blocks
            .iter()
            .find(|b| !with_incoming.contains(b.id.as_str()))
            .or_else(|| self.blocks.first())
            .map(|b| b.id.clone())
            .unwrap_or_else(|| "start".to_string())
    }

    /// Finds a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Finds the first outgoing connection of the given kind.
    pub fn outgoing(&self, source_id: &str, kind: ConnectionKind) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.source_id == source_id && c.kind == kind)
    }

    /// A human-readable identifier for error messages: the diagram's name if
    /// it has one, otherwise its position in the program.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("thread {}", index + 1),
        }
    }
}

/// All thread diagrams under test, sharing one variable namespace.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct Program {
    pub diagrams: Vec<Diagram>,
}

impl Program {
    pub fn new(diagrams: Vec<Diagram>) -> Self {
        Self { diagrams }
    }
}

/// A comparison between a shared variable and a constant.
///
/// Both the code generator and the simulator resolve condition operators
/// through this type, so generated source and simulated control flow always
/// agree. Unrecognized operator strings fall back to `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Comparator {
    /// Parses an operator string as written in a condition block's data.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Le),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    /// Like [`Comparator::parse`], but with the `Eq` fallback applied.
    pub fn parse_or_default(op: &str) -> Self {
        Self::parse(op).unwrap_or(Self::Eq)
    }

    /// The operator as it appears in generated source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }

    /// Evaluates the comparison against a variable value and a constant.
    pub fn eval(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Gt => lhs > rhs,
            Self::Le => lhs <= rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}
