/*!
# Graph Algorithms

This module provides the algorithms built on top of the multigraph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ueuler::algo::*;
```
and gain access to traversal, connectivity and Euler circuits.

Algorithms that consume edges while walking the graph keep their scratch state in a
[`TraversalSession`] that lives exactly as long as one run, so graphs are only ever borrowed
immutably and can be traversed concurrently.
*/

mod connectivity;
mod euler;
mod session;
mod traversal;

use crate::{error::*, prelude::*, walk::Walk};

pub use connectivity::*;
pub use euler::*;
pub use session::*;
pub use traversal::*;
