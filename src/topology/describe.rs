//! Recursive diagnostic dump of an entity and its inferior structure.
//!
//! Debugging aid, not persistence: the output format is free to change.

use crate::geometry::CurveGeometry;
use crate::topology::entity::Payload;
use crate::topology::network::Network;
use crate::topology::point::EntityId;
use itertools::Itertools;
use std::fmt::{self, Write};

impl<C: CurveGeometry> Network<C> {
    /// Writes an indented description of `id` and, recursively, its
    /// inferiors to `out`. `blanking` is the starting indentation depth.
    ///
    /// Shared inferiors are described once per owner, the way they are
    /// reached; a stale or unknown id is printed as such rather than failing
    /// the whole dump.
    pub fn describe<W: Write>(&self, out: &mut W, id: EntityId, blanking: usize) -> fmt::Result {
        for _ in 0..blanking {
            out.write_char(' ')?;
        }
        let Some(ent) = self.entities.get(&id) else {
            return writeln!(out, "<unknown entity {id}>");
        };
        write!(out, "{} {}", ent.kind, id)?;
        match &ent.payload {
            Payload::Vertex { position } => write!(out, " {position}")?,
            Payload::Edge { v1, v2, curve } => {
                let slot = |v: &Option<EntityId>| match v {
                    Some(v) => v.to_string(),
                    None => "-".to_string(),
                };
                write!(out, " v1={} v2={}", slot(v1), slot(v2))?;
                if curve.is_some() {
                    write!(out, " +curve")?;
                }
            }
            Payload::Plain => {}
        }
        if !ent.superiors.is_empty() {
            write!(out, " sup[{}]", ent.superiors.iter().format(","))?;
        }
        writeln!(out)?;
        for &inf in &ent.inferiors {
            self.describe(out, inf, blanking + 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Point3;
    use crate::topology::network::Network;

    #[test]
    fn dump_shows_structure() {
        let mut net = Network::<()>::new();
        let a = net.new_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = net.new_vertex(Point3::new(1.0, 0.0, 0.0));
        let e = net.new_edge_between(a, b, None).unwrap();

        let mut dump = String::new();
        net.describe(&mut dump, e, 0).unwrap();

        assert!(dump.starts_with(&format!("edge {e}")));
        assert!(dump.contains(&format!("v1={a} v2={b}")));
        assert!(dump.contains("zero-chain"));
        assert!(dump.contains("vertex"));
        assert!(dump.contains("(1, 0, 0)"));
        // Inferiors are indented beneath their owner.
        assert!(dump.lines().nth(1).unwrap().starts_with("  "));
    }

    #[test]
    fn dump_of_unknown_id_is_marked() {
        let mut net = Network::<()>::new();
        let v = net.new_vertex(Point3::ORIGIN);
        net.release(v).unwrap();
        let mut dump = String::new();
        net.describe(&mut dump, v, 0).unwrap();
        assert!(dump.contains("unknown entity"));
    }
}
