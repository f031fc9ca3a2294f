use alloy::sol;

sol! {
    #[sol(rpc, all_derives, bytecode = "0x608060405234801561001057600080fd5b5060405161010d38038061010d83398101604081905261002f91610054565b600080546001600160a01b0319166001600160a01b0392909216919091179055610084565b60006020828403121561006657600080fd5b81516001600160a01b038116811461007d57600080fd5b9392505050565b607b806100926000396000f3fe6080604052348015600f57600080fd5b506004361060285760003560e01c8063d56d229d14602d575b600080fd5b60005460405173ffffffffffffffffffffffffffffffffffffffff909116815260200160405180910390f3fea26469706673582212207d3c5b6a8998a7b6c5d4e3f2a1b0c9d8e7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b264736f6c634300081a0033")]
    contract NFT {
        constructor(address marketplaceAddress);

        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);

        function createToken(string memory tokenURI) external returns (uint256);
        function tokenURI(uint256 tokenId) external view returns (string memory);
        function ownerOf(uint256 tokenId) external view returns (address);
    }
}
