use log::{error, info};
use sparse_adt::SparseMatrix;

fn report(label: &str, result: sparse_adt::sparse::Result<SparseMatrix<i64>>) {
    println!("\n{label}:");
    match result {
        Ok(matrix) => print!("{matrix}"),
        Err(err) => error!("{err}"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    info!("Creating two sparse matrices");
    let size = 5;
    let mut first: SparseMatrix<i64> =
        SparseMatrix::from_triplets(size, size, vec![(1, 2, 10), (3, 4, 12), (0, 0, 5)])?;
    let second: SparseMatrix<i64> =
        SparseMatrix::from_triplets(size, size, vec![(1, 2, 2), (3, 4, 4), (0, 0, 1)])?;

    println!("Matrix 1:\n{first}");
    println!("Matrix 2:\n{second}");

    report("Adding Matrix 1 and Matrix 2", first.add(&second));
    report("Subtracting Matrix 2 from Matrix 1", first.sub(&second));
    report("Multiplying Matrix 1 and Matrix 2", first.multiply(&second));

    let wide: SparseMatrix<i64> = SparseMatrix::new(size, size + 1)?;
    report("Multiplying a wider matrix by Matrix 2", wide.multiply(&second));

    println!("\nScaling Matrix 1 by 2:");
    first.scale_by(2);
    print!("{first}");

    println!("\nComparing Matrix 1 and Matrix 2:");
    if first == second {
        println!("Matrices are equal.");
    } else {
        println!("Matrices are not equal.");
    }

    info!(
        "Matrix 1 stores {} of {} entries",
        first.nnz(),
        first.rows() * first.cols()
    );
    Ok(())
}
