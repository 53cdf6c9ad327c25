use crate::expression::{BinaryOp, Node};

/// The five ways to bracket four sequential operands `a b c d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `((a o b) o c) o d`
    LeftFold,
    /// `(a o (b o c)) o d`
    InnerLeft,
    /// `(a o b) o (c o d)`
    Balanced,
    /// `a o ((b o c) o d)`
    InnerRight,
    /// `a o (b o (c o d))`
    RightFold,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::LeftFold,
        Shape::InnerLeft,
        Shape::Balanced,
        Shape::InnerRight,
        Shape::RightFold,
    ];

    /// Evaluate the shape exactly. `ops[i]` sits between operands `i` and `i + 1`.
    pub fn build(self, leaves: &[Node; 4], ops: [BinaryOp; 3]) -> Option<Node> {
        let [a, b, c, d] = leaves;
        let [o1, o2, o3] = ops;
        let join = Node::binary_exact;

        match self {
            Shape::LeftFold => join(&join(&join(a, o1, b)?, o2, c)?, o3, d),
            Shape::InnerLeft => join(&join(a, o1, &join(b, o2, c)?)?, o3, d),
            Shape::Balanced => join(&join(a, o1, b)?, o2, &join(c, o3, d)?),
            Shape::InnerRight => join(a, o1, &join(&join(b, o2, c)?, o3, d)?),
            Shape::RightFold => join(a, o1, &join(b, o2, &join(c, o3, d)?)?),
        }
    }
}

/// Every operator triple, first position varying slowest
pub fn operator_triples() -> Vec<[BinaryOp; 3]> {
    let mut triples = Vec::with_capacity(BinaryOp::ALL.len().pow(3));
    for o1 in BinaryOp::ALL {
        for o2 in BinaryOp::ALL {
            for o3 in BinaryOp::ALL {
                triples.push([o1, o2, o3]);
            }
        }
    }
    triples
}
