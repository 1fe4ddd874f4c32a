//! Basic blocks and the per-function CFG.

use std::rc::Rc;

use crate::{ast::expressions::Expr, semantic::types::Type};

/// Index of a block inside its owning `FunctionCfg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Open,
    Sealed,
}

/// Statement-granularity instructions. Operands stay as AST expressions;
/// instruction selection belongs to the code generator consuming the CFG.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Storage for a local variable with its resolved type.
    Local { name: String, ty: Rc<Type> },
    /// A store of `value` into the lvalue `target`.
    Assign { target: Expr, value: Expr },
    /// An expression evaluated for its side effects.
    Eval(Expr),
    /// A terminator. Only ever the final instruction of a sealed block.
    Branch(Branch),
}

/// Block terminators. Every sealed block ends in exactly one of these.
#[derive(Debug, Clone)]
pub enum Branch {
    Jump(BlockId),
    CondJump {
        cond: Expr,
        then_block: BlockId,
        else_block: BlockId,
    },
    Ret(Option<Expr>),
}

/// A straight-line instruction sequence. `label` is a human-readable hint
/// for diagnostics and dumps, nothing more.
///
/// The two-state tag is the whole integrity story: `append` and `seal`
/// are the only mutation paths and both check it, so a block with
/// instructions after its terminator, or with no terminator once the CFG
/// is handed off, cannot be constructed. Violations are bugs in the
/// lowering code, not user errors, and panic immediately.
#[derive(Debug)]
pub struct BasicBlock {
    pub label: String,
    instructions: Vec<Instruction>,
    state: BlockState,
}

impl BasicBlock {
    pub fn new(label: impl Into<String>) -> Self {
        BasicBlock {
            label: label.into(),
            instructions: Vec::new(),
            state: BlockState::Open,
        }
    }

    pub fn append(&mut self, instruction: Instruction) {
        if self.state == BlockState::Sealed {
            panic!(
                "cannot append an instruction to sealed basic block `{}`",
                self.label
            );
        }
        self.instructions.push(instruction);
    }

    /// Appends the terminator and seals the block.
    pub fn seal(&mut self, branch: Branch) {
        if self.state == BlockState::Sealed {
            panic!("cannot seal basic block `{}` twice", self.label);
        }
        self.instructions.push(Instruction::Branch(branch));
        self.state = BlockState::Sealed;
    }

    pub fn is_sealed(&self) -> bool {
        self.state == BlockState::Sealed
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The terminator of a sealed block; `None` while still open.
    pub fn terminator(&self) -> Option<&Branch> {
        if !self.is_sealed() {
            return None;
        }
        match self.instructions.last() {
            Some(Instruction::Branch(branch)) => Some(branch),
            _ => unreachable!("sealed block must end in a terminator"),
        }
    }
}

/// The control-flow graph of one lowered function.
#[derive(Debug)]
pub struct FunctionCfg {
    pub name: String,
    pub entry: BlockId,
    blocks: Vec<BasicBlock>,
}

impl FunctionCfg {
    pub fn new(name: impl Into<String>) -> Self {
        FunctionCfg {
            name: name.into(),
            entry: BlockId(0),
            blocks: vec![BasicBlock::new("entry")],
        }
    }

    pub fn new_block(&mut self, label: impl Into<String>) -> BlockId {
        self.blocks.push(BasicBlock::new(label));
        BlockId(self.blocks.len() - 1)
    }

    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.0]
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.0]
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    /// True when every block is sealed, i.e. the CFG is safe to hand to
    /// a consumer that walks successors.
    pub fn is_complete(&self) -> bool {
        self.blocks.iter().all(BasicBlock::is_sealed)
    }
}
